//! # seqview
//!
//! Lazily evaluated, composable views over sequences.
//!
//! ## Overview
//!
//! A view describes a sequence without computing it. Views are built from a
//! source and chained through combinators; elements are produced only when
//! a consumer pulls them. The library provides:
//!
//! - **Consumers**: a bidirectional pull protocol (`move_first`, `move_next`,
//!   `move_last`, `move_prev`, `current`) implemented by every view's cursor
//! - **Leaf views**: borrowed containers, owned containers, forward-only
//!   sources, arithmetic ranges and repetition
//! - **Combinators**: filtering and reversal, sharing their parent view
//! - **Flavors**: borrowed items (shared references, re-observable) and
//!   owning items (moved out once), fixed at the type level
//! - **Collections**: a facade adapting views to [`Iterator`] and
//!   materializing them into ordinary containers
//!
//! ## Feature Flags
//!
//! - `arc`: share views through `Arc` instead of `Rc`, making collections
//!   `Send + Sync` when their contents are
//!
//! ## Example
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let evens_backwards = from_container(&numbers)
//!     .filter(|value| **value % 2 == 0)
//!     .reverse();
//!
//! assert_eq!(evens_backwards.to::<Vec<i32>>(), vec![8, 6, 4, 2]);
//!
//! let squares: Vec<u64> = range(5_u64).iter().map(|value| value * value).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the constructors, the collection facade and the traits
/// needed to drive consumers by hand.
///
/// # Usage
///
/// ```rust
/// use seqview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{
        Collection, forward_only, from_container, from_owned, range, range_between, range_by,
        repeat,
    };
    pub use crate::consumer::Consumer;
    pub use crate::error::ViewError;
    pub use crate::flavor::{Borrowed, Owning};
    pub use crate::view::View;
}

pub mod collection;
pub mod consumer;
pub mod error;
pub mod flavor;
pub mod shared;
pub mod view;

pub use collection::{
    Collection, Direction, Iter, forward_only, from_container, from_owned, range, range_between,
    range_by, repeat,
};
pub use consumer::Consumer;
pub use error::{AlreadyConsumedError, ViewError};
pub use flavor::{Borrowed, Flavor, HandOut, Materialize, Owning};
pub use shared::ReferenceCounter;
pub use view::{
    BoxedView, Container, ContainerView, FilteredView, ForwardView, Indexed, Integral, OwnedView,
    RangeView, RepeatView, ReversedView, View,
};

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Collection<RangeView<i32>>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Collection<RangeView<i32>>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Collection<OwnedView<std::vec::IntoIter<String>>>: Send, Sync);
