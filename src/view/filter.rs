//! Filtering of a parent view.
//!
//! [`FilteredConsumer`] scans its parent consumer in the requested
//! direction and stops on the first element accepted by the predicate.
//! Every candidate is retrieved from the parent exactly once and tested
//! exactly once; an accepted item is held locally until it is handed out,
//! a rejected one is dropped. Retrieving once matters for owning parents,
//! where retrieval moves the element out.

use std::fmt;

use crate::consumer::Consumer;
use crate::error::ViewError;
use crate::flavor::HandOut;
use crate::shared::ReferenceCounter;
use crate::view::View;

/// A view keeping the elements of its parent that satisfy a predicate.
///
/// # Examples
///
/// ```rust
/// use seqview::range;
///
/// let odd: Vec<u32> = range(10_u32).filter(|value| value % 2 == 1).to();
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
pub struct FilteredView<V, P> {
    parent: ReferenceCounter<V>,
    predicate: P,
}

impl<V, P> FilteredView<V, P> {
    /// Creates a view over `parent` keeping elements matching `predicate`.
    pub const fn new(parent: ReferenceCounter<V>, predicate: P) -> Self {
        Self { parent, predicate }
    }

    /// Returns the filtered view.
    pub const fn parent(&self) -> &ReferenceCounter<V> {
        &self.parent
    }
}

impl<V: fmt::Debug, P> fmt::Debug for FilteredView<V, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilteredView")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<V, P> View for FilteredView<V, P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    type Item = V::Item;
    type Flavor = V::Flavor;
    type Consumer = FilteredConsumer<V, P>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        let parent = ReferenceCounter::clone(&self.parent).open()?;
        Ok(FilteredConsumer {
            view: self,
            parent,
            held: None,
        })
    }
}

/// Consumer skipping the parent's elements rejected by the predicate.
pub struct FilteredConsumer<V: View, P> {
    view: ReferenceCounter<FilteredView<V, P>>,
    parent: V::Consumer,
    held: Option<V::Item>,
}

impl<V, P> FilteredConsumer<V, P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    /// Retrieves the parent's current element and holds it if accepted.
    fn accept_current(&mut self) -> bool {
        let candidate = self.parent.current();
        if (self.view.predicate)(&candidate) {
            self.held = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Starting from a parent move that returned `positioned`, keeps moving
    /// with `step` until an element is accepted or the parent runs out.
    fn scan(&mut self, mut positioned: bool, step: fn(&mut V::Consumer) -> bool) -> bool {
        self.held = None;
        while positioned {
            if self.accept_current() {
                return true;
            }
            positioned = step(&mut self.parent);
        }
        false
    }
}

impl<V, P> Consumer for FilteredConsumer<V, P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    type Item = V::Item;

    fn move_first(&mut self) -> bool {
        let positioned = self.parent.move_first();
        self.scan(positioned, <V::Consumer as Consumer>::move_next)
    }

    fn move_next(&mut self) -> bool {
        let positioned = self.parent.move_next();
        self.scan(positioned, <V::Consumer as Consumer>::move_next)
    }

    fn move_last(&mut self) -> bool {
        let positioned = self.parent.move_last();
        self.scan(positioned, <V::Consumer as Consumer>::move_prev)
    }

    fn move_prev(&mut self) -> bool {
        let positioned = self.parent.move_prev();
        self.scan(positioned, <V::Consumer as Consumer>::move_prev)
    }

    fn current(&mut self) -> V::Item {
        <V::Flavor as HandOut<V::Item>>::hand_out(&mut self.held).unwrap_or_else(|| {
            panic!("current called on a filter consumer with no held item")
        })
    }
}
