//! Item-passing discipline.
//!
//! Every view has a flavor, fixed at the type level through
//! [`View::Flavor`](crate::view::View::Flavor):
//!
//! - [`Borrowed`]: items are shared references into storage that outlives
//!   the pipeline. They can be observed any number of times, and
//!   materializing them clones the referenced element.
//! - [`Owning`]: items are values moved out of the view's storage when
//!   retrieved. Each position can be retrieved once, and materializing
//!   moves the value into the output container.
//!
//! Combinators inherit the flavor of their parent, so a filter over an
//! owning view is itself owning.

mod sealed {
    pub trait Sealed {}
}

/// Marker for the two item flavors.
///
/// This trait is sealed; [`Borrowed`] and [`Owning`] are its only
/// implementors.
pub trait Flavor: sealed::Sealed + 'static {
    /// `true` if retrieving an item moves it out of storage.
    const IS_OWNING: bool;
}

/// Items are shared references, re-observable and cloned on materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Borrowed;

/// Items are owned values, moved out once and moved on materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Owning;

impl sealed::Sealed for Borrowed {}
impl sealed::Sealed for Owning {}

impl Flavor for Borrowed {
    const IS_OWNING: bool = false;
}

impl Flavor for Owning {
    const IS_OWNING: bool = true;
}

/// Hands out an item held by a combinator, following the flavor's rules.
///
/// Filters hold the last accepted item locally. A borrowed item is copied
/// out and stays held; an owning item is taken, leaving the slot empty.
pub trait HandOut<I>: Flavor {
    /// Returns the held item, or `None` if there is nothing to hand out.
    fn hand_out(held: &mut Option<I>) -> Option<I>;
}

impl<'a, T: ?Sized> HandOut<&'a T> for Borrowed {
    #[inline]
    fn hand_out(held: &mut Option<&'a T>) -> Option<&'a T> {
        *held
    }
}

impl<I> HandOut<I> for Owning {
    #[inline]
    fn hand_out(held: &mut Option<I>) -> Option<I> {
        held.take()
    }
}

/// Converts an item into the value stored by a materialized container.
pub trait Materialize<I>: Flavor {
    /// The element type of the output container.
    type Value;

    /// Turns one item into an output element.
    fn materialize(item: I) -> Self::Value;
}

impl<T: Clone> Materialize<&T> for Borrowed {
    type Value = T;

    #[inline]
    fn materialize(item: &T) -> T {
        item.clone()
    }
}

impl<I> Materialize<I> for Owning {
    type Value = I;

    #[inline]
    fn materialize(item: I) -> I {
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_borrowed_hand_out_keeps_item() {
        let value = String::from("kept");
        let mut held = Some(&value);
        assert_eq!(Borrowed::hand_out(&mut held), Some(&value));
        assert_eq!(Borrowed::hand_out(&mut held), Some(&value));
        assert!(held.is_some());
    }

    #[rstest]
    fn test_owning_hand_out_takes_item() {
        let mut held = Some(Box::new(5));
        assert_eq!(Owning::hand_out(&mut held), Some(Box::new(5)));
        assert_eq!(Owning::hand_out(&mut held), None);
    }

    #[rstest]
    fn test_borrowed_materialize_clones() {
        let value = vec![1, 2];
        let materialized: Vec<i32> = Borrowed::materialize(&value);
        assert_eq!(materialized, value);
    }

    #[rstest]
    fn test_owning_materialize_moves() {
        let value = Box::new("moved");
        assert_eq!(*Owning::materialize(value), "moved");
    }

    #[rstest]
    fn test_flavor_flags() {
        assert!(!Borrowed::IS_OWNING);
        assert!(Owning::IS_OWNING);
    }
}
