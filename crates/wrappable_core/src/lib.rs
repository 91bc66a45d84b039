//! Capability traits and shared handles for chained errors.
//!
//! This crate provides the "plain error" side of the wrappable ecosystem: the
//! values that chains are built from, and the optional behaviors chain
//! algorithms look for while walking them.
//!
//! # Capabilities
//!
//! Every chainable value implements [`Fault`]. Beyond a message, a fault may
//! opt in to any of:
//! - [`Unwrappable`]: yields the next error of its own private chain
//! - [`Headed`]: exposes the topmost error of a composite value
//! - [`Appendable`]: grows its own chain at the tail
//! - [`SelfMatching`] / [`SelfExtracting`]: answers membership and extraction itself
//! - [`RootAware`]: resolves its own root cause
//!
//! Faults are shared through [`ErrorRef`], whose equality is identity.
//!
//! # Examples
//!
//! ```
//! use wrappable_core::{ErrorRef, errorf};
//!
//! let eof = ErrorRef::msg("EOF");
//! let err = errorf!(wraps: eof.clone(), "read header: {}", eof);
//!
//! assert_eq!(err.to_string(), "read header: EOF");
//! assert_eq!(err.unwrap_once(), Some(eof.clone()));
//! assert_ne!(eof, ErrorRef::msg("EOF"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod fault;
mod handle;
mod leaf;
mod slot;

pub use error::{ChainError, ChainErrorKind, ChainResult};
pub use fault::{
    Appendable, AsAny, Fault, Headed, RootAware, SelfExtracting, SelfMatching, Unwrappable,
};
pub use handle::{ErrorRef, IntoCause};
pub use leaf::{Foreign, Formatted, Message};
pub use slot::{Capability, ErrorSlot};

/// Builds a [`Formatted`] error handle, like `format!` for errors.
///
/// With a leading `wraps: <error>,` the new error unwraps to that inner error,
/// so it can stand in the middle of a chain.
///
/// # Examples
///
/// ```
/// use wrappable_core::{ErrorRef, errorf};
///
/// let plain = errorf!("status {}", 503);
/// assert_eq!(plain.to_string(), "status 503");
/// assert!(plain.unwrap_once().is_none());
///
/// let pipe = ErrorRef::msg("closed pipe");
/// let wrapped = errorf!(wraps: pipe.clone(), "flush: {}", pipe);
/// assert_eq!(wrapped.unwrap_once(), Some(pipe));
/// ```
#[macro_export]
macro_rules! errorf {
    (wraps: $inner:expr, $($arg:tt)+) => {
        $crate::ErrorRef::new($crate::Formatted::wrapping($inner, ::std::format!($($arg)+)))
    };
    ($($arg:tt)+) => {
        $crate::ErrorRef::new($crate::Formatted::new(::std::format!($($arg)+)))
    };
}
