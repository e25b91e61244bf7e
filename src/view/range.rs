//! Bounded arithmetic progressions.
//!
//! A [`RangeView`] yields `start, start + step, start + 2 * step, ...` up
//! to, but excluding, `finish`. The direction is fixed at construction:
//!
//! - ascending when `start < finish` and `step > 0`
//! - descending when `finish < start` and `step < 0`
//! - empty otherwise (including `start == finish`)
//!
//! The number of elements is computed once, in 128-bit arithmetic, as
//! `ceil(|finish - start| / |step|)`. The last element is therefore
//! `start + (count - 1) * step`, which never reaches `finish` even when the
//! span is an exact multiple of the step, and stepping can never overflow
//! the element type.

use std::fmt;

use num::PrimInt;

use crate::consumer::Consumer;
use crate::error::ViewError;
use crate::flavor::Owning;
use crate::shared::ReferenceCounter;
use crate::view::View;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types usable as range elements.
///
/// Implemented for every signed and unsigned integer of at most 64 bits,
/// including `isize` and `usize`. All of them widen losslessly to `i128`,
/// which is where range bounds are computed.
pub trait Integral: PrimInt + fmt::Debug + sealed::Sealed {
    /// Converts the value to `i128` without loss.
    fn widen(self) -> i128;

    /// Converts an `i128` known to be in range back to the element type.
    fn narrow(wide: i128) -> Self;
}

macro_rules! impl_integral {
    ($($integer:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $integer {}

            impl Integral for $integer {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn narrow(wide: i128) -> Self {
                    wide as $integer
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A bounded arithmetic progression with an exclusive finish.
///
/// # Examples
///
/// ```rust
/// use seqview::{range, range_by};
///
/// let ascending: Vec<i32> = range_by(2, 10, 3).unwrap().to();
/// assert_eq!(ascending, vec![2, 5, 8]);
///
/// let descending: Vec<i32> = range_by(10, 2, -3).unwrap().to();
/// assert_eq!(descending, vec![10, 7, 4]);
///
/// let counted: Vec<u8> = range(5).to();
/// assert_eq!(counted, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RangeView<T> {
    start: T,
    finish: T,
    step: T,
    count: u128,
}

impl<T: Integral> RangeView<T> {
    /// Creates a range from `start` towards `finish` (exclusive) by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ZeroStep`] if `step` is zero.
    pub fn new(start: T, finish: T, step: T) -> Result<Self, ViewError> {
        if step.is_zero() {
            return Err(ViewError::ZeroStep);
        }
        Ok(Self::with_nonzero_step(start, finish, step))
    }

    /// Creates an ascending range with a step of one.
    pub fn with_unit_step(start: T, finish: T) -> Self {
        Self::with_nonzero_step(start, finish, T::one())
    }

    fn with_nonzero_step(start: T, finish: T, step: T) -> Self {
        let zero = T::zero();
        let moves_towards_finish =
            (start < finish && step > zero) || (finish < start && step < zero);
        let count = if moves_towards_finish {
            let span = finish.widen().abs_diff(start.widen());
            span.div_ceil(step.widen().unsigned_abs())
        } else {
            0
        };
        Self {
            start,
            finish,
            step,
            count,
        }
    }

    /// Returns the first element of the progression.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive bound of the progression.
    #[inline]
    pub const fn finish(&self) -> T {
        self.finish
    }

    /// Returns the distance between consecutive elements.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn count(&self) -> u128 {
        self.count
    }

    /// Returns the element at `index`, or `None` past the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::RangeView;
    ///
    /// let view = RangeView::new(10_i64, 2, -3).unwrap();
    /// assert_eq!(view.get(2), Some(4));
    /// assert_eq!(view.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<T> {
        let index = index as u128;
        (index < self.count).then(|| self.value_at(index))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn value_at(&self, index: u128) -> T {
        T::narrow(self.start.widen() + index as i128 * self.step.widen())
    }
}

impl<T: fmt::Debug> fmt::Debug for RangeView<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RangeView")
            .field("start", &self.start)
            .field("finish", &self.finish)
            .field("step", &self.step)
            .field("count", &self.count)
            .finish()
    }
}

impl<T: Integral> View for RangeView<T> {
    type Item = T;
    type Flavor = Owning;
    type Consumer = RangeConsumer<T>;

    fn open(self: ReferenceCounter<Self>) -> Result<Self::Consumer, ViewError> {
        log::trace!("opening range consumer over {:?}", self);
        Ok(RangeConsumer {
            view: *self,
            position: Position::Unpositioned,
        })
    }

    fn exact_len(&self) -> Option<usize> {
        usize::try_from(self.count).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position<T> {
    Unpositioned,
    At { index: u128, value: T },
    Exhausted,
}

/// Consumer generating the elements of a [`RangeView`].
#[derive(Debug, Clone)]
pub struct RangeConsumer<T> {
    view: RangeView<T>,
    position: Position<T>,
}

impl<T: Integral> RangeConsumer<T> {
    fn settle(&mut self, index: Option<u128>) -> bool {
        self.position = match index {
            Some(index) if index < self.view.count => Position::At {
                index,
                value: self.view.value_at(index),
            },
            _ => Position::Exhausted,
        };
        matches!(self.position, Position::At { .. })
    }

    #[track_caller]
    fn index(&self, operation: &'static str) -> u128 {
        match self.position {
            Position::At { index, .. } => index,
            Position::Unpositioned => {
                panic!("{operation} called before the consumer was positioned")
            }
            Position::Exhausted => panic!("{operation} called on an exhausted consumer"),
        }
    }
}

impl<T: Integral> Consumer for RangeConsumer<T> {
    type Item = T;

    fn move_first(&mut self) -> bool {
        self.settle(Some(0))
    }

    fn move_next(&mut self) -> bool {
        let index = self.index("move_next");
        self.settle(Some(index + 1))
    }

    fn move_last(&mut self) -> bool {
        self.settle(self.view.count.checked_sub(1))
    }

    fn move_prev(&mut self) -> bool {
        let index = self.index("move_prev");
        self.settle(index.checked_sub(1))
    }

    fn current(&mut self) -> T {
        match self.position {
            Position::At { value, .. } => value,
            _ => {
                self.index("current");
                unreachable!("index panics when not positioned")
            }
        }
    }
}
