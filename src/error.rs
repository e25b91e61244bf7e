//! Error types for view construction and consumption.
//!
//! Exhaustion is not an error: it is reported by the `move_*` methods of
//! [`Consumer`](crate::consumer::Consumer) returning `false`. The types in
//! this module cover the two recoverable failures a caller can observe:
//! building a range with a zero step, and opening an owning view whose
//! storage has already been handed to an earlier consumer.

/// Represents an error when an owning view has already been consumed.
///
/// An owning view moves its elements out as they are retrieved, so it can
/// be traversed exactly once. Opening a second consumer over it (directly
/// or through any collection derived from it) results in this error.
///
/// # Examples
///
/// ```rust
/// use seqview::AlreadyConsumedError;
///
/// let error = AlreadyConsumedError {
///     view_name: "OwnedView",
///     method_name: "open",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "OwnedView::open: storage already consumed. Owning views can be traversed only once."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadyConsumedError {
    /// The name of the view whose storage was already taken.
    pub view_name: &'static str,
    /// The name of the method that tried to take it again.
    pub method_name: &'static str,
}

impl std::fmt::Display for AlreadyConsumedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: storage already consumed. Owning views can be traversed only once.",
            self.view_name, self.method_name
        )
    }
}

impl std::error::Error for AlreadyConsumedError {}

/// Represents errors that can occur when building or opening views.
///
/// # Examples
///
/// ```rust
/// use seqview::{ViewError, range_by};
///
/// let error = range_by(0, 10, 0).unwrap_err();
/// assert_eq!(error, ViewError::ZeroStep);
/// assert_eq!(format!("{error}"), "range step must not be zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A range was built with a step of zero.
    ZeroStep,
    /// An owning view was opened after its storage had been consumed.
    AlreadyConsumed(AlreadyConsumedError),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(formatter, "range step must not be zero"),
            Self::AlreadyConsumed(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ZeroStep => None,
            Self::AlreadyConsumed(error) => Some(error),
        }
    }
}

impl From<AlreadyConsumedError> for ViewError {
    fn from(error: AlreadyConsumedError) -> Self {
        Self::AlreadyConsumed(error)
    }
}
