//! The bidirectional pull protocol shared by every view.
//!
//! A [`Consumer`] is the per-traversal cursor of a view. It is positioned
//! with [`move_first`](Consumer::move_first) or
//! [`move_last`](Consumer::move_last), stepped with
//! [`move_next`](Consumer::move_next) and [`move_prev`](Consumer::move_prev),
//! and read with [`current`](Consumer::current).
//!
//! # Contract
//!
//! - A `false` result means "no such element" and leaves the consumer
//!   exhausted. Only `move_first` and `move_last` may be called on an
//!   exhausted consumer.
//! - Stepping or reading a consumer that is not positioned on an element is
//!   a programmer error and panics.
//!
//! # Examples
//!
//! ```rust
//! use seqview::{Consumer, from_container};
//!
//! let numbers = vec![1, 2, 3];
//! let mut consumer = from_container(&numbers).consumer();
//!
//! assert!(consumer.move_last());
//! assert_eq!(consumer.current(), &3);
//! assert!(consumer.move_prev());
//! assert_eq!(consumer.current(), &2);
//! assert!(consumer.move_prev());
//! assert!(!consumer.move_prev());
//! ```

/// A cursor over a lazily evaluated sequence that can move in both
/// directions.
pub trait Consumer {
    /// The type of the items handed out by [`current`](Self::current).
    type Item;

    /// Positions the cursor on the first element.
    ///
    /// Returns `false` if the sequence is empty.
    fn move_first(&mut self) -> bool;

    /// Advances the cursor one element forward.
    ///
    /// Returns `false` when there is no next element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an element.
    fn move_next(&mut self) -> bool;

    /// Positions the cursor on the last element.
    ///
    /// Returns `false` if the sequence is empty.
    fn move_last(&mut self) -> bool;

    /// Moves the cursor one element backward.
    ///
    /// Returns `false` when there is no previous element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an element.
    fn move_prev(&mut self) -> bool;

    /// Returns the item under the cursor.
    ///
    /// For owning views this moves the item out, so it may be called only
    /// once per position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an element, or if an
    /// owning item at this position was already retrieved.
    fn current(&mut self) -> Self::Item;
}

impl<C: Consumer + ?Sized> Consumer for Box<C> {
    type Item = C::Item;

    #[inline]
    fn move_first(&mut self) -> bool {
        (**self).move_first()
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    #[inline]
    fn move_last(&mut self) -> bool {
        (**self).move_last()
    }

    #[inline]
    fn move_prev(&mut self) -> bool {
        (**self).move_prev()
    }

    #[inline]
    fn current(&mut self) -> Self::Item {
        (**self).current()
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Cursor state of a leaf consumer that addresses elements by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// Neither `move_first` nor `move_last` has been called yet.
    Unpositioned,
    /// Positioned on the element with this index.
    At(usize),
    /// A move ran off either end of the sequence.
    Exhausted,
}

impl Cursor {
    /// Positions on the first of `length` elements.
    pub(crate) const fn first(length: usize) -> Self {
        if length == 0 { Self::Exhausted } else { Self::At(0) }
    }

    /// Positions on the last of `length` elements.
    pub(crate) const fn last(length: usize) -> Self {
        if length == 0 {
            Self::Exhausted
        } else {
            Self::At(length - 1)
        }
    }

    /// Returns the index under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an element.
    #[track_caller]
    pub(crate) fn index(self, operation: &'static str) -> usize {
        match self {
            Self::At(index) => index,
            Self::Unpositioned => {
                panic!("{operation} called before the consumer was positioned")
            }
            Self::Exhausted => panic!("{operation} called on an exhausted consumer"),
        }
    }

    /// Steps one element forward within `length` elements.
    #[track_caller]
    pub(crate) fn next(self, length: usize) -> Self {
        let index = self.index("move_next");
        if index + 1 < length {
            Self::At(index + 1)
        } else {
            Self::Exhausted
        }
    }

    /// Steps one element backward.
    #[track_caller]
    pub(crate) fn prev(self) -> Self {
        match self.index("move_prev") {
            0 => Self::Exhausted,
            index => Self::At(index - 1),
        }
    }

    pub(crate) const fn is_positioned(self) -> bool {
        matches!(self, Self::At(_))
    }
}
