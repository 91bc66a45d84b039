//! Shared, identity-compared error handles.

use std::error::Error;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::{Fault, Foreign, Message};

/// A shared handle to a [`Fault`].
///
/// Cloning is cheap and keeps identity, which is what sentinel matching
/// compares: two handles are equal only when they point at the same
/// allocation. Wrapping the same value twice with [`ErrorRef::new`] yields two
/// distinct identities.
///
/// # Examples
///
/// ```
/// use wrappable_core::ErrorRef;
///
/// let not_found = ErrorRef::msg("not found");
/// let copy = not_found.clone();
///
/// assert_eq!(not_found, copy);
/// assert_ne!(not_found, ErrorRef::msg("not found"));
/// ```
#[derive(Clone)]
pub struct ErrorRef(Arc<dyn Fault>);

impl ErrorRef {
    /// Shares a fault behind a new handle.
    pub fn new<F: Fault>(fault: F) -> Self {
        Self(Arc::new(fault))
    }

    /// A plain error carrying `message`.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message::new(message))
    }

    /// Adapts any standard error that has no chain capabilities of its own.
    pub fn from_std<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(Foreign::new(err))
    }

    /// Whether both handles share one allocation.
    pub fn ptr_eq(&self, other: &ErrorRef) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Whether this handle points at `fault`.
    ///
    /// Lets a fault compare itself against a handle from inside its own
    /// capability methods, where only `&self` is available.
    pub fn points_to(&self, fault: &dyn Fault) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), std::ptr::from_ref(fault))
    }

    /// Borrows the underlying fault.
    pub fn as_fault(&self) -> &dyn Fault {
        &*self.0
    }
}

impl Deref for ErrorRef {
    type Target = dyn Fault;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Display for ErrorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for ErrorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Error for ErrorRef {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&*self.0)
    }
}

impl PartialEq for ErrorRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ErrorRef {}

impl<F: Fault> From<F> for ErrorRef {
    fn from(fault: F) -> Self {
        Self::new(fault)
    }
}

/// Conversion into an optional chain link.
///
/// `None` stands for the absent error: appending it is a no-op.
pub trait IntoCause {
    /// Converts `self` into the error to append, if any.
    fn into_cause(self) -> Option<ErrorRef>;
}

impl IntoCause for ErrorRef {
    fn into_cause(self) -> Option<ErrorRef> {
        Some(self)
    }
}

impl IntoCause for &ErrorRef {
    fn into_cause(self) -> Option<ErrorRef> {
        Some(self.clone())
    }
}

impl IntoCause for Option<ErrorRef> {
    fn into_cause(self) -> Option<ErrorRef> {
        self
    }
}

impl<F: Fault> IntoCause for F {
    fn into_cause(self) -> Option<ErrorRef> {
        Some(ErrorRef::new(self))
    }
}
