//! The collection facade.
//!
//! [`Collection`] wraps a shared handle to a view and is the surface most
//! callers use: it chains combinators, adapts the view to Rust iterators and
//! materializes it into ordinary containers. Collections are cheap to clone;
//! clones share the same view.
//!
//! Collections are built with the free functions of this module:
//!
//! | Function           | View             | Flavor     |
//! |--------------------|------------------|------------|
//! | [`from_container`] | [`ContainerView`]| `Borrowed` |
//! | [`forward_only`]   | [`ForwardView`]  | `Borrowed` |
//! | [`from_owned`]     | [`OwnedView`]    | `Owning`   |
//! | [`range`]          | [`RangeView`]    | `Owning`   |
//! | [`range_between`]  | [`RangeView`]    | `Owning`   |
//! | [`range_by`]       | [`RangeView`]    | `Owning`   |
//! | [`repeat`]         | [`RepeatView`]   | `Owning`   |

mod iter;

pub use iter::{Direction, Iter};

use std::fmt;

use crate::error::ViewError;
use crate::flavor::Materialize;
use crate::shared::ReferenceCounter;
use crate::view::{
    BoxedView, Container, ContainerView, FilteredView, ForwardView, Integral, OwnedView,
    RangeView, RepeatView, ReversedView, View,
};

/// A lazily evaluated sequence backed by a shared view.
///
/// # Examples
///
/// ```rust
/// use seqview::from_container;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// let collection = from_container(&numbers);
/// let odd = collection.filter(|value| **value % 2 == 1);
/// let backwards = odd.reverse();
///
/// assert_eq!(backwards.to::<Vec<i32>>(), vec![5, 3, 1]);
/// // Every collection in the chain stays usable.
/// assert_eq!(odd.to::<Vec<i32>>(), vec![1, 3, 5]);
/// assert_eq!(collection.len(), Some(6));
/// ```
pub struct Collection<V> {
    view: ReferenceCounter<V>,
}

impl<V> Collection<V> {
    /// Wraps an already shared view.
    #[inline]
    #[must_use]
    pub const fn from_view(view: ReferenceCounter<V>) -> Self {
        Self { view }
    }

    /// Wraps `view`.
    #[inline]
    #[must_use]
    pub fn new(view: V) -> Self {
        Self::from_view(ReferenceCounter::new(view))
    }

    /// Returns the shared view.
    #[inline]
    #[must_use]
    pub const fn view(&self) -> &ReferenceCounter<V> {
        &self.view
    }
}

impl<V: View> Collection<V> {
    /// Returns a collection keeping the elements that satisfy `predicate`.
    ///
    /// The predicate should be pure: it is evaluated lazily, once per
    /// candidate element and traversal.
    #[inline]
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Collection<FilteredView<V, P>>
    where
        P: Fn(&V::Item) -> bool,
    {
        Collection::new(FilteredView::new(
            ReferenceCounter::clone(&self.view),
            predicate,
        ))
    }

    /// Like [`filter`](Self::filter), consuming this handle.
    #[inline]
    #[must_use]
    pub fn into_filter<P>(self, predicate: P) -> Collection<FilteredView<V, P>>
    where
        P: Fn(&V::Item) -> bool,
    {
        Collection::new(FilteredView::new(self.view, predicate))
    }

    /// Returns a collection traversing this one back to front.
    #[inline]
    #[must_use]
    pub fn reverse(&self) -> Collection<ReversedView<V>> {
        Collection::new(ReversedView::new(ReferenceCounter::clone(&self.view)))
    }

    /// Like [`reverse`](Self::reverse), consuming this handle.
    #[inline]
    #[must_use]
    pub fn into_reverse(self) -> Collection<ReversedView<V>> {
        Collection::new(ReversedView::new(self.view))
    }

    /// Opens a raw consumer over the view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AlreadyConsumed`] if the view owns its elements
    /// and they were already handed to an earlier consumer.
    #[inline]
    pub fn try_consumer(&self) -> Result<V::Consumer, ViewError> {
        ReferenceCounter::clone(&self.view).open()
    }

    /// Opens a raw consumer over the view.
    ///
    /// # Panics
    ///
    /// Panics if [`try_consumer`](Self::try_consumer) fails.
    #[inline]
    #[must_use]
    pub fn consumer(&self) -> V::Consumer {
        self.try_consumer().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns an iterator from the first element to the last.
    ///
    /// # Errors
    ///
    /// Fails like [`try_consumer`](Self::try_consumer).
    #[inline]
    pub fn try_iter(&self) -> Result<Iter<V::Consumer>, ViewError> {
        self.open_iter(Direction::Forward)
    }

    /// Returns an iterator from the first element to the last.
    ///
    /// # Panics
    ///
    /// Panics if [`try_iter`](Self::try_iter) fails.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<V::Consumer> {
        self.try_iter().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns an iterator from the last element to the first.
    ///
    /// # Errors
    ///
    /// Fails like [`try_consumer`](Self::try_consumer).
    #[inline]
    pub fn try_iter_rev(&self) -> Result<Iter<V::Consumer>, ViewError> {
        self.open_iter(Direction::Backward)
    }

    /// Returns an iterator from the last element to the first.
    ///
    /// # Panics
    ///
    /// Panics if [`try_iter_rev`](Self::try_iter_rev) fails.
    #[inline]
    #[must_use]
    pub fn iter_rev(&self) -> Iter<V::Consumer> {
        self.try_iter_rev().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the number of elements, if it is known without traversal.
    ///
    /// Filtered collections always report `None`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.view.exact_len()
    }

    /// Materializes the elements into a new container.
    ///
    /// Borrowed items are cloned into the container; owning items are moved.
    ///
    /// # Errors
    ///
    /// Fails like [`try_consumer`](Self::try_consumer).
    pub fn try_to<B>(&self) -> Result<B, ViewError>
    where
        V::Flavor: Materialize<V::Item>,
        B: FromIterator<<V::Flavor as Materialize<V::Item>>::Value>,
    {
        Ok(self
            .try_iter()?
            .map(<V::Flavor as Materialize<V::Item>>::materialize)
            .collect())
    }

    /// Materializes the elements into a new container.
    ///
    /// # Panics
    ///
    /// Panics if [`try_to`](Self::try_to) fails.
    #[must_use]
    pub fn to<B>(&self) -> B
    where
        V::Flavor: Materialize<V::Item>,
        B: FromIterator<<V::Flavor as Materialize<V::Item>>::Value>,
    {
        self.try_to().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Erases the concrete view type.
    #[must_use]
    pub fn boxed<'a>(&self) -> Collection<BoxedView<'a, V::Item, V::Flavor>>
    where
        V: 'a,
        V::Consumer: 'a,
    {
        Collection::new(BoxedView::new(ReferenceCounter::clone(&self.view)))
    }

    fn open_iter(&self, direction: Direction) -> Result<Iter<V::Consumer>, ViewError> {
        let consumer = self.try_consumer()?;
        Ok(Iter::new(consumer, direction, self.view.exact_len()))
    }
}

impl<T: Integral> Collection<RangeView<T>> {
    /// Returns the element at `index` without traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::range_by;
    ///
    /// let tens = range_by(0_i64, 100, 10).unwrap();
    /// assert_eq!(tens.get(3), Some(30));
    /// assert_eq!(tens.get(10), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.view.get(index)
    }
}

impl<V> Clone for Collection<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_view(ReferenceCounter::clone(&self.view))
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Collection").field(&self.view).finish()
    }
}

impl<V: View> IntoIterator for &Collection<V> {
    type Item = V::Item;
    type IntoIter = Iter<V::Consumer>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: View> IntoIterator for Collection<V> {
    type Item = V::Item;
    type IntoIter = Iter<V::Consumer>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Adapts a borrowed container.
///
/// Random-access containers step in O(1) both ways. Ordered sets and
/// linked lists step backward through their own reverse iteration, and only
/// containers without one (`HashSet`) synthesize backward steps.
///
/// # Examples
///
/// ```rust
/// use seqview::from_container;
///
/// let words = vec!["lazy", "views"];
/// let collection = from_container(&words);
/// assert_eq!(collection.iter_rev().collect::<Vec<_>>(), vec![&"views", &"lazy"]);
/// ```
#[inline]
#[must_use]
pub fn from_container<C: Container + ?Sized>(container: &C) -> Collection<ContainerView<'_, C>> {
    Collection::new(ContainerView::new(container))
}

/// Adapts any borrowed source whose shared reference iterates over `&T`
/// with a cloneable iterator.
///
/// Backward steps restart iteration, costing O(position) each.
///
/// # Examples
///
/// ```rust
/// use std::collections::BinaryHeap;
/// use seqview::forward_only;
///
/// let heap: BinaryHeap<u8> = [4, 9, 1].into_iter().collect();
/// let collection = forward_only(&heap);
/// let mut forward: Vec<u8> = collection.to();
/// let mut backward: Vec<u8> = collection.reverse().to();
/// backward.reverse();
/// assert_eq!(forward, backward);
/// forward.sort_unstable();
/// assert_eq!(forward, vec![1, 4, 9]);
/// ```
#[inline]
#[must_use]
pub fn forward_only<'a, C, T>(
    container: &'a C,
) -> Collection<ForwardView<'a, T, <&'a C as IntoIterator>::IntoIter>>
where
    C: ?Sized,
    T: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
    <&'a C as IntoIterator>::IntoIter: Clone,
{
    Collection::new(ForwardView::new(container.into_iter()))
}

/// Takes ownership of a container; elements are moved out on traversal.
///
/// No element is produced before the first traversal. The resulting
/// collection, and every collection derived from it, can be traversed once.
#[inline]
#[must_use]
pub fn from_owned<C: IntoIterator>(container: C) -> Collection<OwnedView<C::IntoIter>> {
    Collection::new(OwnedView::new(container))
}

/// Counts from zero up to `finish` (exclusive).
///
/// # Examples
///
/// ```rust
/// use seqview::range;
///
/// assert_eq!(range(5_u16).to::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(-3_i32).len(), Some(0));
/// ```
#[inline]
#[must_use]
pub fn range<T: Integral>(finish: T) -> Collection<RangeView<T>> {
    Collection::new(RangeView::with_unit_step(T::zero(), finish))
}

/// Counts from `start` up to `finish` (exclusive).
#[inline]
#[must_use]
pub fn range_between<T: Integral>(start: T, finish: T) -> Collection<RangeView<T>> {
    Collection::new(RangeView::with_unit_step(start, finish))
}

/// Steps from `start` towards `finish` (exclusive) by `step`.
///
/// The range is empty unless `step` points from `start` towards `finish`.
///
/// # Errors
///
/// Returns [`ViewError::ZeroStep`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use seqview::range_by;
///
/// assert_eq!(range_by(2, 10, 3).unwrap().to::<Vec<i32>>(), vec![2, 5, 8]);
/// assert_eq!(range_by(10, 2, -3).unwrap().to::<Vec<i32>>(), vec![10, 7, 4]);
/// assert!(range_by(10, 2, 3).unwrap().to::<Vec<i32>>().is_empty());
/// ```
#[inline]
pub fn range_by<T: Integral>(start: T, finish: T, step: T) -> Result<Collection<RangeView<T>>, ViewError> {
    RangeView::new(start, finish, step).map(Collection::new)
}

/// Repeats `item` `count` times.
#[inline]
#[must_use]
pub fn repeat<T: Clone>(item: T, count: usize) -> Collection<RepeatView<T>> {
    Collection::new(RepeatView::new(item, count))
}
