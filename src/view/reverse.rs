//! Reversal of a parent view.
//!
//! [`ReversedView`] is pure delegation: every positioning and stepping
//! operation is forwarded to the mirrored operation of the parent consumer,
//! and items pass through unchanged. Reversing a reversed view therefore
//! behaves exactly like the original.

use std::fmt;

use crate::consumer::Consumer;
use crate::error::ViewError;
use crate::shared::ReferenceCounter;
use crate::view::View;

/// A view traversing its parent back to front.
///
/// # Examples
///
/// ```rust
/// use seqview::from_container;
///
/// let letters = ['a', 'b', 'c'];
/// let reversed: Vec<char> = from_container(&letters).reverse().to();
/// assert_eq!(reversed, vec!['c', 'b', 'a']);
/// ```
pub struct ReversedView<V> {
    parent: ReferenceCounter<V>,
}

impl<V> ReversedView<V> {
    /// Creates a view reversing `parent`.
    pub const fn new(parent: ReferenceCounter<V>) -> Self {
        Self { parent }
    }

    /// Returns the reversed view.
    pub const fn parent(&self) -> &ReferenceCounter<V> {
        &self.parent
    }
}

impl<V: fmt::Debug> fmt::Debug for ReversedView<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ReversedView")
            .field(&self.parent)
            .finish()
    }
}

impl<V: View> View for ReversedView<V> {
    type Item = V::Item;
    type Flavor = V::Flavor;
    type Consumer = ReversedConsumer<V::Consumer>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        let parent = ReferenceCounter::clone(&self.parent).open()?;
        Ok(ReversedConsumer { parent })
    }

    fn exact_len(&self) -> Option<usize> {
        self.parent.exact_len()
    }
}

/// Consumer swapping the directions of its parent consumer.
pub struct ReversedConsumer<C> {
    parent: C,
}

impl<C: Consumer> Consumer for ReversedConsumer<C> {
    type Item = C::Item;

    #[inline]
    fn move_first(&mut self) -> bool {
        self.parent.move_last()
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        self.parent.move_prev()
    }

    #[inline]
    fn move_last(&mut self) -> bool {
        self.parent.move_first()
    }

    #[inline]
    fn move_prev(&mut self) -> bool {
        self.parent.move_next()
    }

    #[inline]
    fn current(&mut self) -> C::Item {
        self.parent.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RangeView;
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
    fn test_reversed_range() {
        let range = ReferenceCounter::new(RangeView::with_unit_step(0, 4));
        let reversed = ReferenceCounter::new(ReversedView::new(range));
        assert_eq!(collect(reversed.open().unwrap()), vec![3, 2, 1, 0]);
    }

    #[rstest]
    fn test_double_reversal_is_identity() {
        let range = ReferenceCounter::new(RangeView::new(1, 10, 4).unwrap());
        let once = ReferenceCounter::new(ReversedView::new(ReferenceCounter::clone(&range)));
        let twice = ReferenceCounter::new(ReversedView::new(once));
        assert_eq!(collect(twice.open().unwrap()), collect(range.open().unwrap()));
    }

    #[rstest]
    fn test_reversed_shares_parent() {
        let range = ReferenceCounter::new(RangeView::with_unit_step(0, 2));
        let reversed = ReversedView::new(ReferenceCounter::clone(&range));
        assert_eq!(ReferenceCounter::strong_count(&range), 2);
        assert_eq!(reversed.exact_len(), Some(2));
        drop(reversed);
        assert_eq!(ReferenceCounter::strong_count(&range), 1);
    }

    #[rstest]
    fn test_reversed_backward_is_parent_forward() {
        let range = ReferenceCounter::new(RangeView::with_unit_step(5, 8));
        let reversed = ReferenceCounter::new(ReversedView::new(range));
        let mut consumer = reversed.open().unwrap();
        assert!(consumer.move_last());
        assert_eq!(consumer.current(), 5);
        assert!(consumer.move_prev());
        assert_eq!(consumer.current(), 6);
    }
}
