//! Lazily evaluated views.
//!
//! A view is an immutable description of a sequence. Leaf views source
//! their elements from a real container or generate them; combinator views
//! wrap a parent view shared through [`ReferenceCounter`]. Nothing is
//! computed until a [`Consumer`] is opened over the view and driven.
//!
//! - [`ContainerView`]: borrows a container implementing [`Container`]
//! - [`ForwardView`]: borrows any forward-only, cloneable iterator source
//! - [`OwnedView`]: takes ownership of a container and moves elements out
//! - [`RangeView`]: arithmetic progression with a bounded, exclusive finish
//! - [`RepeatView`]: one item repeated a fixed number of times
//! - [`ReversedView`]: swaps forward and backward traversal of its parent
//! - [`FilteredView`]: keeps the parent's elements matching a predicate
//! - [`BoxedView`]: type-erased handle over any of the above
//!
//! Views are normally built and used through
//! [`Collection`](crate::Collection).

use crate::consumer::Consumer;
use crate::error::ViewError;
use crate::flavor::HandOut;
use crate::shared::ReferenceCounter;

mod boxed;
mod container;
mod filter;
mod owned;
mod range;
mod repeat;
mod reverse;

pub use boxed::{BoxedView, ErasedView};
pub use container::{
    Container, ContainerView, DoubleEndedConsumer, ForwardConsumer, ForwardView, Indexed,
    IndexedConsumer, OrderedSetConsumer,
};
pub use filter::{FilteredConsumer, FilteredView};
pub use owned::{OwnedConsumer, OwnedView};
pub use range::{Integral, RangeConsumer, RangeView};
pub use repeat::{RepeatConsumer, RepeatView};
pub use reverse::{ReversedConsumer, ReversedView};

/// A lazily evaluated sequence that can hand out consumers.
///
/// # Item flavor
///
/// [`Flavor`](Self::Flavor) is either [`Borrowed`](crate::Borrowed) or
/// [`Owning`](crate::Owning) and decides how held items are handed out by
/// combinators. Combinators use their parent's flavor.
pub trait View {
    /// The type of the items produced by this view's consumers.
    type Item;

    /// The item-passing discipline of this view.
    type Flavor: HandOut<Self::Item>;

    /// The cursor type opened by [`open`](Self::open).
    type Consumer: Consumer<Item = Self::Item>;

    /// Opens a fresh consumer over this view.
    ///
    /// The consumer keeps the view alive through the handle passed in.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AlreadyConsumed`] if the view (or a view it is
    /// built on) owns its elements and they were already handed to an
    /// earlier consumer.
    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError>;

    /// Returns the number of elements if it is known without traversal.
    ///
    /// A `Some` result must be exact: consumers over this view produce
    /// exactly that many elements in either direction. Views that cannot
    /// know their length without traversal (filters) return `None`.
    fn exact_len(&self) -> Option<usize> {
        None
    }
}
