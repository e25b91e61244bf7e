//! Shared ownership primitives.
//!
//! Views are shared between collections and the consumers opened over them
//! through [`ReferenceCounter`]. Owning views keep their storage in a
//! [`TakeOnce`] cell so that exactly one consumer can move it out.
//!
//! Both types are selected by the `arc` feature.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// TakeOnce
// =============================================================================

#[cfg(feature = "arc")]
type Slot<T> = std::sync::Mutex<Option<T>>;

#[cfg(not(feature = "arc"))]
type Slot<T> = std::cell::RefCell<Option<T>>;

/// A cell whose content can be taken out exactly once through a shared
/// reference.
pub(crate) struct TakeOnce<T> {
    slot: Slot<T>,
}

impl<T> TakeOnce<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self {
            slot: Slot::new(Some(value)),
        }
    }

    /// Takes the content, leaving the cell empty.
    ///
    /// Returns `None` on every call after the first.
    #[cfg(not(feature = "arc"))]
    pub(crate) fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    /// Takes the content, leaving the cell empty.
    ///
    /// Returns `None` on every call after the first.
    #[cfg(feature = "arc")]
    pub(crate) fn take(&self) -> Option<T> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
    }

    #[cfg(not(feature = "arc"))]
    pub(crate) fn is_taken(&self) -> bool {
        self.slot.borrow().is_none()
    }

    #[cfg(feature = "arc")]
    pub(crate) fn is_taken(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_none()
    }
}

// =============================================================================
// Tests
// =============================================================================
