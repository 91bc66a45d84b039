//! Leaf errors: plain messages, formatted errors and adapted std errors.

use std::error::Error;
use std::fmt;

use derive_getters::Getters;

use crate::{ErrorRef, Fault, Unwrappable};

/// A plain error carrying only a message.
///
/// Every call to [`Message::new`] is a new sentinel candidate: once behind an
/// [`ErrorRef`], it only matches handles cloned from that same handle.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{message}")]
pub struct Message {
    message: String,
}

impl Message {
    /// Create a message error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Fault for Message {}

/// An error built from formatted text, optionally wrapping one inner error.
///
/// The wrapped error is reachable through [`Unwrappable`], which is what
/// lets a formatted error sit in the middle of a chain without hiding what
/// it wraps. Usually built with [`errorf!`](crate::errorf).
#[derive(Debug, Clone, Getters, derive_more::Display)]
#[display("{message}")]
pub struct Formatted {
    /// The rendered message.
    message: String,
    /// The error this one wraps, if any.
    wrapped: Option<ErrorRef>,
}

impl Formatted {
    /// A formatted error with nothing underneath.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            wrapped: None,
        }
    }

    /// A formatted error that unwraps to `wrapped`.
    pub fn wrapping(wrapped: impl Into<ErrorRef>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            wrapped: Some(wrapped.into()),
        }
    }
}

impl Error for Formatted {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.wrapped.as_ref().map(|inner| inner as &(dyn Error + 'static))
    }
}

impl Unwrappable for Formatted {
    fn unwrap_once(&self) -> Option<ErrorRef> {
        self.wrapped.clone()
    }
}

impl Fault for Formatted {
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        self.wrapped.as_ref().map(|_| self as &dyn Unwrappable)
    }
}

/// Adapter for standard errors that know nothing about chains.
///
/// The adapted error is an opaque leaf: its `source()` stays visible to
/// std-style consumers, but chain algorithms cannot unwrap past it.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use wrappable_core::ErrorRef;
///
/// let err = ErrorRef::from_std(fmt::Error);
/// assert!(err.downcast_ref::<fmt::Error>().is_some());
/// ```
#[derive(Debug, Clone, derive_more::From)]
pub struct Foreign<E>(E);

impl<E> Foreign<E> {
    /// Adapt `err`.
    pub fn new(err: E) -> Self {
        Self(err)
    }

    /// The adapted error.
    pub fn inner(&self) -> &E {
        &self.0
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: fmt::Display> fmt::Display for Foreign<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<E: Error + 'static> Error for Foreign<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl<E> Fault for Foreign<E> where E: Error + Send + Sync + 'static {}
