//! Type-erased views.
//!
//! Static composition gives every pipeline its own concrete type, e.g.
//! `FilteredView<ReversedView<ContainerView<'_, Vec<i32>>>, F>`. When
//! pipelines of different shapes must be stored or passed around as one
//! type, they can be erased into a [`BoxedView`], whose consumers are
//! `Box<dyn Consumer>` and dispatch dynamically.

use std::fmt;
use std::marker::PhantomData;

use crate::consumer::Consumer;
use crate::error::ViewError;
use crate::flavor::HandOut;
use crate::shared::ReferenceCounter;
use crate::view::View;

/// Object-safe form of [`View`] for an item type `I` and flavor `F`.
///
/// Implemented for every view; not meant to be implemented by hand.
pub trait ErasedView<'a, I, F> {
    /// Opens a boxed consumer over this view.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying [`View::open`].
    fn open_boxed(
        self: ReferenceCounter<Self>,
    ) -> Result<Box<dyn Consumer<Item = I> + 'a>, ViewError>;

    /// Returns the number of elements if it is known without traversal.
    fn erased_len(&self) -> Option<usize>;
}

impl<'a, V> ErasedView<'a, V::Item, V::Flavor> for V
where
    V: View + 'a,
    V::Consumer: 'a,
{
    fn open_boxed(
        self: ReferenceCounter<Self>,
    ) -> Result<Box<dyn Consumer<Item = V::Item> + 'a>, ViewError> {
        let consumer = View::open(self)?;
        Ok(Box::new(consumer))
    }

    fn erased_len(&self) -> Option<usize> {
        View::exact_len(self)
    }
}

/// A view of erased concrete type, yielding `I` with flavor `F`.
///
/// # Examples
///
/// ```rust
/// use seqview::{BoxedView, Collection, Owning, range, range_by};
///
/// let pipelines: Vec<Collection<BoxedView<'static, i32, Owning>>> = vec![
///     range(4_i32).boxed(),
///     range(10_i32).filter(|value| value % 5 == 0).boxed(),
///     range_by(9_i32, 0, -4).unwrap().reverse().boxed(),
/// ];
/// let collected: Vec<Vec<i32>> = pipelines.iter().map(|pipeline| pipeline.to()).collect();
/// assert_eq!(collected, vec![vec![0, 1, 2, 3], vec![0, 5], vec![1, 5, 9]]);
/// ```
pub struct BoxedView<'a, I, F> {
    inner: ReferenceCounter<dyn ErasedView<'a, I, F> + 'a>,
    flavor: PhantomData<F>,
}

impl<'a, I, F> BoxedView<'a, I, F> {
    /// Erases the concrete type of `view`.
    pub fn new<V>(view: ReferenceCounter<V>) -> Self
    where
        V: View<Item = I, Flavor = F> + 'a,
        V::Consumer: 'a,
    {
        let inner: ReferenceCounter<dyn ErasedView<'a, I, F> + 'a> = view;
        Self {
            inner,
            flavor: PhantomData,
        }
    }
}

impl<I, F> fmt::Debug for BoxedView<'_, I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoxedView")
            .field("length", &self.inner.erased_len())
            .finish_non_exhaustive()
    }
}

impl<'a, I, F: HandOut<I>> View for BoxedView<'a, I, F> {
    type Item = I;
    type Flavor = F;
    type Consumer = Box<dyn Consumer<Item = I> + 'a>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        ReferenceCounter::clone(&self.inner).open_boxed()
    }

    fn exact_len(&self) -> Option<usize> {
        self.inner.erased_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::{Borrowed, Owning};
    use crate::view::{ContainerView, FilteredView, OwnedView, RangeView, ReversedView};
    use rstest::rstest;

    fn collect<C: Consumer>(mut consumer: C) -> Vec<C::Item> {
        let mut items = Vec::new();
        let mut has_item = consumer.move_first();
        while has_item {
            items.push(consumer.current());
            has_item = consumer.move_next();
        }
        items
    }

    #[rstest]
    fn test_boxed_views_of_different_shapes_share_a_type() {
        let numbers = vec![1, 2, 3, 4];
        let plain = ReferenceCounter::new(ContainerView::new(&numbers));
        let reversed = ReferenceCounter::new(ReversedView::new(ReferenceCounter::clone(&plain)));
        let views: Vec<ReferenceCounter<BoxedView<'_, &i32, Borrowed>>> = vec![
            ReferenceCounter::new(BoxedView::new(plain)),
            ReferenceCounter::new(BoxedView::new(reversed)),
        ];
        let collected: Vec<Vec<&i32>> = views
            .into_iter()
            .map(|view| collect(view.open().unwrap()))
            .collect();
        assert_eq!(collected, vec![vec![&1, &2, &3, &4], vec![&4, &3, &2, &1]]);
    }

    #[rstest]
    fn test_boxed_view_keeps_length() {
        let range = ReferenceCounter::new(RangeView::with_unit_step(0, 6));
        let boxed: BoxedView<'_, i32, Owning> = BoxedView::new(range);
        assert_eq!(boxed.exact_len(), Some(6));
        assert!(format!("{boxed:?}").contains("Some(6)"));
    }

    #[rstest]
    fn test_boxed_view_forwards_open_errors() {
        let owned = ReferenceCounter::new(OwnedView::new(vec![1, 2]));
        let filtered = ReferenceCounter::new(FilteredView::new(owned, |value: &i32| *value > 1));
        let boxed = ReferenceCounter::new(BoxedView::new(filtered));
        assert_eq!(collect(ReferenceCounter::clone(&boxed).open().unwrap()), vec![2]);
        assert!(boxed.open().is_err());
    }
}
