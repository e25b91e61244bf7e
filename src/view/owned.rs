//! Owning adaptation of a container.
//!
//! [`OwnedView`] takes a container by value and hands its elements out by
//! moving them. Nothing is produced from the container until the view is
//! opened: construction only turns it into its by-value iterator, which is
//! lazy for every standard container and iterator adapter.
//!
//! The iterator lives in a take-once cell. The first consumer opened over
//! the view (directly or through any derived view) drains it into an indexed
//! slot buffer, so the consumer can walk both directions and empty each slot
//! exactly once. This makes the view usable with move-only element types.
//! Every later attempt to open fails with [`ViewError::AlreadyConsumed`].

use std::fmt;

use crate::consumer::{Consumer, Cursor};
use crate::error::{AlreadyConsumedError, ViewError};
use crate::flavor::Owning;
use crate::shared::{ReferenceCounter, TakeOnce};
use crate::view::View;

/// A view that owns its elements and moves them out on retrieval.
///
/// `I` is the by-value iterator of the adapted container.
///
/// # Examples
///
/// ```rust
/// use seqview::from_owned;
///
/// let names = from_owned(vec![String::from("ada"), String::from("grace")]);
/// let upper: Vec<String> = names.iter().map(|name| name.to_uppercase()).collect();
/// assert_eq!(upper, vec!["ADA", "GRACE"]);
///
/// // The elements have been moved out.
/// assert!(names.try_iter().is_err());
/// ```
pub struct OwnedView<I> {
    source: TakeOnce<I>,
    length: Option<usize>,
}

impl<I: Iterator> OwnedView<I> {
    /// Creates a view taking ownership of `container`.
    ///
    /// The length is taken from the iterator's `size_hint` when its bounds
    /// agree.
    pub fn new<C: IntoIterator<IntoIter = I>>(container: C) -> Self {
        let source = container.into_iter();
        let length = match source.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        };
        Self {
            source: TakeOnce::new(source),
            length,
        }
    }
}

impl<I> OwnedView<I> {
    /// Returns `true` once the elements have been handed to a consumer.
    pub fn is_consumed(&self) -> bool {
        self.source.is_taken()
    }
}

impl<I> fmt::Debug for OwnedView<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OwnedView")
            .field("length", &self.length)
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

impl<I: Iterator> View for OwnedView<I> {
    type Item = I::Item;
    type Flavor = Owning;
    type Consumer = OwnedConsumer<I::Item>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        if let Some(source) = self.source.take() {
            let slots: Vec<Option<I::Item>> = source.map(Some).collect();
            log::trace!("owned view of {} elements handed to a consumer", slots.len());
            Ok(OwnedConsumer::new(slots))
        } else {
            log::debug!("refusing to reopen a consumed owned view");
            Err(ViewError::AlreadyConsumed(AlreadyConsumedError {
                view_name: "OwnedView",
                method_name: "open",
            }))
        }
    }

    fn exact_len(&self) -> Option<usize> {
        self.length
    }
}

/// Consumer moving elements out of an [`OwnedView`]'s slot buffer.
pub struct OwnedConsumer<T> {
    slots: Vec<Option<T>>,
    cursor: Cursor,
}

impl<T> OwnedConsumer<T> {
    const fn new(slots: Vec<Option<T>>) -> Self {
        Self {
            slots,
            cursor: Cursor::Unpositioned,
        }
    }

    /// Returns the number of elements not yet moved out.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T> Consumer for OwnedConsumer<T> {
    type Item = T;

    fn move_first(&mut self) -> bool {
        self.cursor = Cursor::first(self.slots.len());
        self.cursor.is_positioned()
    }

    fn move_next(&mut self) -> bool {
        self.cursor = self.cursor.next(self.slots.len());
        self.cursor.is_positioned()
    }

    fn move_last(&mut self) -> bool {
        self.cursor = Cursor::last(self.slots.len());
        self.cursor.is_positioned()
    }

    fn move_prev(&mut self) -> bool {
        self.cursor = self.cursor.prev();
        self.cursor.is_positioned()
    }

    fn current(&mut self) -> T {
        let index = self.cursor.index("current");
        self.slots[index].take().unwrap_or_else(|| {
            panic!("current called twice at position {index} of an owning view")
        })
    }
}
