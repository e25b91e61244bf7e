//! Borrowing adaptation of existing containers.
//!
//! Which consumer walks a container is chosen by its [`Container`] impl:
//!
//! - Random-access containers (slices, arrays, `Vec`, `VecDeque`) implement
//!   [`Indexed`] and use [`IndexedConsumer`], which steps in O(1) in both
//!   directions.
//! - `BTreeSet` uses [`OrderedSetConsumer`], which finds the neighbours of
//!   the current element through ordered range queries, O(log n) per step
//!   in either direction.
//! - `LinkedList` uses [`DoubleEndedConsumer`], which keeps one iterator
//!   behind and one ahead of the current element. Steps continuing in the
//!   same direction are O(1); turning around rebuilds the iterator for the
//!   new direction and skips to the neighbour, because stable `std` offers
//!   no list cursor that could step back from an arbitrary node.
//! - Containers with no reverse traversal at all (`HashSet`) use
//!   [`ForwardConsumer`]. Stepping backward restarts iteration and walks to
//!   the predecessor, costing O(position) per step.
//!
//! Any other container whose shared reference iterates over `&T` can be
//! adapted through [`forward_only`](crate::forward_only), which builds a
//! [`ForwardView`].
//!
//! The source stays borrowed for the lifetime of the collection, so it
//! cannot be mutated while any consumer over it is alive.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::iter::Fuse;
use std::marker::PhantomData;
use std::ops::Bound;

use crate::consumer::{Consumer, Cursor};
use crate::error::ViewError;
use crate::flavor::Borrowed;
use crate::shared::ReferenceCounter;
use crate::view::View;

// =============================================================================
// Container traits
// =============================================================================

/// A container that a borrowing view can walk.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use seqview::from_container;
///
/// let list: LinkedList<i32> = (1..=4).collect();
/// let evens: Vec<i32> = from_container(&list).filter(|value| **value % 2 == 0).to();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub trait Container {
    /// The type of the stored elements.
    type Element;

    /// The consumer walking a borrowed container.
    type Consumer<'a>: Consumer<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Opens a consumer over this container.
    fn consumer(&self) -> Self::Consumer<'_>;

    /// Returns the number of stored elements, if known cheaply.
    fn exact_len(&self) -> Option<usize>;
}

/// A container with O(1) access by index.
pub trait Indexed {
    /// The type of the stored elements.
    type Element;

    /// Returns the number of stored elements.
    fn count(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn element(&self, index: usize) -> &Self::Element;
}

impl<T> Indexed for [T] {
    type Element = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Element = T;

    #[inline]
    fn count(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexed for Vec<T> {
    type Element = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexed for VecDeque<T> {
    type Element = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

macro_rules! impl_indexed_container {
    ($([$($generics:tt)*] $container:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Container for $container {
                type Element = T;
                type Consumer<'a>
                    = IndexedConsumer<'a, Self>
                where
                    Self: 'a;

                #[inline]
                fn consumer(&self) -> Self::Consumer<'_> {
                    IndexedConsumer::new(self)
                }

                #[inline]
                fn exact_len(&self) -> Option<usize> {
                    Some(self.count())
                }
            }
        )*
    };
}

impl_indexed_container!(
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
);

impl<T> Container for LinkedList<T> {
    type Element = T;
    type Consumer<'a>
        = DoubleEndedConsumer<'a, T, std::collections::linked_list::Iter<'a, T>>
    where
        Self: 'a;

    fn consumer(&self) -> Self::Consumer<'_> {
        DoubleEndedConsumer::new(self.iter())
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Element = T;
    type Consumer<'a>
        = OrderedSetConsumer<'a, T>
    where
        Self: 'a;

    fn consumer(&self) -> Self::Consumer<'_> {
        OrderedSetConsumer::new(self)
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S: BuildHasher> Container for HashSet<T, S> {
    type Element = T;
    type Consumer<'a>
        = ForwardConsumer<'a, T, std::collections::hash_set::Iter<'a, T>>
    where
        Self: 'a;

    fn consumer(&self) -> Self::Consumer<'_> {
        ForwardConsumer::new(self.iter())
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

// =============================================================================
// ContainerView
// =============================================================================

/// A borrowing view over a [`Container`].
pub struct ContainerView<'a, C: ?Sized> {
    container: &'a C,
}

impl<'a, C: ?Sized> ContainerView<'a, C> {
    /// Creates a view borrowing `container`.
    #[inline]
    pub const fn new(container: &'a C) -> Self {
        Self { container }
    }

    /// Returns the adapted container.
    #[inline]
    pub const fn container(&self) -> &'a C {
        self.container
    }
}

impl<C: ?Sized> fmt::Debug for ContainerView<'_, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ContainerView").finish_non_exhaustive()
    }
}

impl<'a, C: Container + ?Sized> View for ContainerView<'a, C> {
    type Item = &'a C::Element;
    type Flavor = Borrowed;
    type Consumer = C::Consumer<'a>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        log::trace!("opening consumer over {}", std::any::type_name::<C>());
        let container: &'a C = self.container;
        Ok(container.consumer())
    }

    fn exact_len(&self) -> Option<usize> {
        self.container.exact_len()
    }
}

// =============================================================================
// IndexedConsumer
// =============================================================================

/// Consumer over an [`Indexed`] container, stepping in O(1) both ways.
pub struct IndexedConsumer<'a, C: ?Sized> {
    container: &'a C,
    cursor: Cursor,
}

impl<'a, C: Indexed + ?Sized> IndexedConsumer<'a, C> {
    /// Creates an unpositioned consumer over `container`.
    #[inline]
    pub const fn new(container: &'a C) -> Self {
        Self {
            container,
            cursor: Cursor::Unpositioned,
        }
    }
}

impl<'a, C: Indexed + ?Sized> Consumer for IndexedConsumer<'a, C> {
    type Item = &'a C::Element;

    fn move_first(&mut self) -> bool {
        self.cursor = Cursor::first(self.container.count());
        self.cursor.is_positioned()
    }

    fn move_next(&mut self) -> bool {
        self.cursor = self.cursor.next(self.container.count());
        self.cursor.is_positioned()
    }

    fn move_last(&mut self) -> bool {
        self.cursor = Cursor::last(self.container.count());
        self.cursor.is_positioned()
    }

    fn move_prev(&mut self) -> bool {
        self.cursor = self.cursor.prev();
        self.cursor.is_positioned()
    }

    fn current(&mut self) -> &'a C::Element {
        let container: &'a C = self.container;
        container.element(self.cursor.index("current"))
    }
}

// =============================================================================
// OrderedSetConsumer
// =============================================================================

#[derive(Debug)]
enum Anchor<'a, T> {
    Unpositioned,
    At(&'a T),
    Exhausted,
}

/// Consumer over a `BTreeSet`, stepping through ordered range queries.
pub struct OrderedSetConsumer<'a, T> {
    set: &'a BTreeSet<T>,
    anchor: Anchor<'a, T>,
}

impl<'a, T: Ord> OrderedSetConsumer<'a, T> {
    /// Creates an unpositioned consumer over `set`.
    #[inline]
    pub const fn new(set: &'a BTreeSet<T>) -> Self {
        Self {
            set,
            anchor: Anchor::Unpositioned,
        }
    }

    #[track_caller]
    fn element(&self, operation: &'static str) -> &'a T {
        match self.anchor {
            Anchor::At(element) => element,
            Anchor::Unpositioned => {
                panic!("{operation} called before the consumer was positioned")
            }
            Anchor::Exhausted => panic!("{operation} called on an exhausted consumer"),
        }
    }

    fn settle(&mut self, element: Option<&'a T>) -> bool {
        self.anchor = element.map_or(Anchor::Exhausted, Anchor::At);
        element.is_some()
    }
}

impl<'a, T: Ord> Consumer for OrderedSetConsumer<'a, T> {
    type Item = &'a T;

    fn move_first(&mut self) -> bool {
        let set: &'a BTreeSet<T> = self.set;
        self.settle(set.first())
    }

    fn move_next(&mut self) -> bool {
        let set: &'a BTreeSet<T> = self.set;
        let current = self.element("move_next");
        let bounds: (Bound<&T>, Bound<&T>) = (Bound::Excluded(current), Bound::Unbounded);
        self.settle(set.range::<T, _>(bounds).next())
    }

    fn move_last(&mut self) -> bool {
        let set: &'a BTreeSet<T> = self.set;
        self.settle(set.last())
    }

    fn move_prev(&mut self) -> bool {
        let set: &'a BTreeSet<T> = self.set;
        let current = self.element("move_prev");
        self.settle(set.range::<T, _>(..current).next_back())
    }

    fn current(&mut self) -> &'a T {
        self.element("current")
    }
}

// =============================================================================
// DoubleEndedConsumer
// =============================================================================

/// Consumer over a source whose iterator is double-ended but not indexable.
///
/// `behind` covers the elements before the current one and `ahead` the
/// elements after it. Each is valid only while traversal keeps going in its
/// direction; after a turn it is rebuilt from a fresh iterator, walking in
/// from the end that faces the new direction.
pub struct DoubleEndedConsumer<'a, T: ?Sized, I> {
    start: I,
    length: usize,
    cursor: Cursor,
    current: Option<&'a T>,
    behind: Option<I>,
    ahead: Option<I>,
}

impl<'a, T, I> DoubleEndedConsumer<'a, T, I>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator + Clone,
{
    /// Creates an unpositioned consumer from an iterator over the whole
    /// source.
    pub fn new(start: I) -> Self {
        let length = start.len();
        Self {
            start,
            length,
            cursor: Cursor::Unpositioned,
            current: None,
            behind: None,
            ahead: None,
        }
    }

    fn settle(&mut self, index: usize, element: Option<&'a T>) -> bool {
        self.current = element;
        self.cursor = if element.is_some() {
            Cursor::At(index)
        } else {
            Cursor::Exhausted
        };
        element.is_some()
    }
}

impl<'a, T, I> Consumer for DoubleEndedConsumer<'a, T, I>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator + Clone,
{
    type Item = &'a T;

    fn move_first(&mut self) -> bool {
        let mut ahead = self.start.clone();
        let element = ahead.next();
        self.ahead = Some(ahead);
        self.behind = None;
        self.settle(0, element)
    }

    fn move_next(&mut self) -> bool {
        let next = self.cursor.index("move_next") + 1;
        let element = if next >= self.length {
            None
        } else if let Some(ahead) = &mut self.ahead {
            ahead.next()
        } else {
            let mut ahead = self.start.clone();
            let element = ahead.nth(next);
            self.ahead = Some(ahead);
            element
        };
        self.behind = None;
        self.settle(next, element)
    }

    fn move_last(&mut self) -> bool {
        let mut behind = self.start.clone();
        let element = behind.next_back();
        self.behind = Some(behind);
        self.ahead = None;
        self.settle(self.length.saturating_sub(1), element)
    }

    fn move_prev(&mut self) -> bool {
        let index = self.cursor.index("move_prev");
        self.ahead = None;
        if index == 0 {
            self.behind = None;
            return self.settle(0, None);
        }
        let previous = index - 1;
        let element = if let Some(behind) = &mut self.behind {
            behind.next_back()
        } else {
            let mut behind = self.start.clone();
            let element = behind.nth_back(self.length - 1 - previous);
            self.behind = Some(behind);
            element
        };
        self.settle(previous, element)
    }

    fn current(&mut self) -> &'a T {
        let index = self.cursor.index("current");
        self.current
            .unwrap_or_else(|| panic!("double-ended consumer lost its element at position {index}"))
    }
}

// =============================================================================
// ForwardView / ForwardConsumer
// =============================================================================

/// A borrowing view over a source that can only be iterated forward.
///
/// The source is represented by an iterator positioned at its start; it is
/// cloned every time iteration has to restart.
pub struct ForwardView<'a, T: ?Sized, I> {
    start: I,
    length: Option<usize>,
    marker: PhantomData<&'a T>,
}

impl<'a, T, I> ForwardView<'a, T, I>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    /// Creates a view from an iterator positioned at the start of the
    /// source.
    ///
    /// The length is taken from the iterator's `size_hint` when its bounds
    /// agree.
    pub fn new(start: I) -> Self {
        let length = match start.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        };
        Self {
            start,
            length,
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized, I> fmt::Debug for ForwardView<'_, T, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ForwardView")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<'a, T, I> View for ForwardView<'a, T, I>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    type Item = &'a T;
    type Flavor = Borrowed;
    type Consumer = ForwardConsumer<'a, T, I>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        log::trace!("opening forward-only consumer");
        Ok(ForwardConsumer::new(self.start.clone()))
    }

    fn exact_len(&self) -> Option<usize> {
        self.length
    }
}

/// Consumer over a forward-only source.
///
/// Backward steps are synthesized by restarting from the beginning and
/// walking to the predecessor of the current position.
pub struct ForwardConsumer<'a, T: ?Sized, I> {
    start: I,
    iterator: Fuse<I>,
    cursor: Cursor,
    current: Option<&'a T>,
}

impl<'a, T, I> ForwardConsumer<'a, T, I>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    /// Creates an unpositioned consumer from an iterator positioned at the
    /// start of the source.
    pub fn new(start: I) -> Self {
        let iterator = start.clone().fuse();
        Self {
            start,
            iterator,
            cursor: Cursor::Unpositioned,
            current: None,
        }
    }

    fn restart(&mut self) {
        self.iterator = self.start.clone().fuse();
    }

    fn settle(&mut self, index: usize, element: Option<&'a T>) -> bool {
        self.current = element;
        self.cursor = if element.is_some() {
            Cursor::At(index)
        } else {
            Cursor::Exhausted
        };
        element.is_some()
    }
}

impl<'a, T, I> Consumer for ForwardConsumer<'a, T, I>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    type Item = &'a T;

    fn move_first(&mut self) -> bool {
        self.restart();
        let element = self.iterator.next();
        self.settle(0, element)
    }

    fn move_next(&mut self) -> bool {
        let index = self.cursor.index("move_next");
        let element = self.iterator.next();
        self.settle(index + 1, element)
    }

    fn move_last(&mut self) -> bool {
        self.restart();
        let mut last = None;
        for (index, element) in self.iterator.by_ref().enumerate() {
            last = Some((index, element));
        }
        match last {
            Some((index, element)) => self.settle(index, Some(element)),
            None => self.settle(0, None),
        }
    }

    fn move_prev(&mut self) -> bool {
        let index = self.cursor.index("move_prev");
        if index == 0 {
            return self.settle(0, None);
        }
        self.restart();
        let element = self.iterator.nth(index - 1);
        self.settle(index - 1, element)
    }

    fn current(&mut self) -> &'a T {
        let index = self.cursor.index("current");
        self.current
            .unwrap_or_else(|| panic!("forward consumer lost its element at position {index}"))
    }
}
