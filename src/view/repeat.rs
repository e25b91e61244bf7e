//! One item repeated a fixed number of times.

use std::fmt;

use crate::consumer::{Consumer, Cursor};
use crate::error::ViewError;
use crate::flavor::Owning;
use crate::shared::ReferenceCounter;
use crate::view::View;

/// A view yielding `count` clones of a single item.
///
/// Every retrieval produces a fresh clone, so the view is owning even
/// though its item is never moved out.
///
/// # Examples
///
/// ```rust
/// use seqview::repeat;
///
/// let greetings: Vec<String> = repeat(String::from("hi"), 3).to();
/// assert_eq!(greetings, vec!["hi", "hi", "hi"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RepeatView<T> {
    item: T,
    count: usize,
}

impl<T: Clone> RepeatView<T> {
    /// Creates a view repeating `item` `count` times.
    pub const fn new(item: T, count: usize) -> Self {
        Self { item, count }
    }

    /// Returns the repeated item.
    pub const fn item(&self) -> &T {
        &self.item
    }
}

impl<T: fmt::Debug> fmt::Debug for RepeatView<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepeatView")
            .field("item", &self.item)
            .field("count", &self.count)
            .finish()
    }
}

impl<T: Clone> View for RepeatView<T> {
    type Item = T;
    type Flavor = Owning;
    type Consumer = RepeatConsumer<T>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        log::trace!("opening repeat consumer of {} items", self.count);
        Ok(RepeatConsumer {
            view: self,
            cursor: Cursor::Unpositioned,
        })
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.count)
    }
}

/// Consumer over a [`RepeatView`].
pub struct RepeatConsumer<T> {
    view: ReferenceCounter<RepeatView<T>>,
    cursor: Cursor,
}

impl<T: Clone> Consumer for RepeatConsumer<T> {
    type Item = T;

    fn move_first(&mut self) -> bool {
        self.cursor = Cursor::first(self.view.count);
        self.cursor.is_positioned()
    }

    fn move_next(&mut self) -> bool {
        self.cursor = self.cursor.next(self.view.count);
        self.cursor.is_positioned()
    }

    fn move_last(&mut self) -> bool {
        self.cursor = Cursor::last(self.view.count);
        self.cursor.is_positioned()
    }

    fn move_prev(&mut self) -> bool {
        self.cursor = self.cursor.prev();
        self.cursor.is_positioned()
    }

    fn current(&mut self) -> T {
        self.cursor.index("current");
        self.view.item.clone()
    }
}
