//! The plain-error abstraction and its optional capabilities.

use std::any::Any;
use std::error::Error;

use crate::{ErrorRef, ErrorSlot, Foreign};

/// Runtime type access for trait objects.
///
/// Blanket-implemented for every `'static` type; [`Fault`] requires it so
/// that `dyn Fault` values can be downcast.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Single-level unwrap of a value's own chain.
pub trait Unwrappable {
    /// Returns the next error in the chain, or `None` at its end.
    fn unwrap_once(&self) -> Option<ErrorRef>;
}

/// Access to the topmost error of a composite value.
pub trait Headed {
    /// The error at the top of this value's stack.
    fn topmost(&self) -> ErrorRef;
}

/// Values that know how to extend their own chain at the tail.
pub trait Appendable {
    /// Returns a new value with `err` appended; `self` is left untouched.
    fn append(&self, err: ErrorRef) -> ErrorRef;
}

/// A membership test owned by the value itself.
pub trait SelfMatching {
    /// Reports whether `target` is part of this value.
    fn is_match(&self, target: &ErrorRef) -> bool;

    /// Whether a negative [`is_match`](Self::is_match) already searched
    /// everything this value unwraps to, so a walk can stop here.
    fn covers_unwrap(&self) -> bool {
        false
    }
}

/// A type-directed extraction owned by the value itself.
pub trait SelfExtracting {
    /// Offers this value, or parts of it, to `slot`. Returns `true` once the
    /// slot accepted something.
    fn extract_into(&self, slot: &mut dyn ErrorSlot) -> bool;

    /// Whether a negative [`extract_into`](Self::extract_into) already
    /// searched everything this value unwraps to, so a walk can stop here.
    fn covers_unwrap(&self) -> bool {
        false
    }
}

/// A value that resolves its own root cause.
pub trait RootAware {
    /// The deepest error this value knows about.
    fn root(&self) -> ErrorRef;
}

/// An error that can take part in a chain.
///
/// The only mandatory behavior is the message, through [`std::fmt::Display`].
/// Every `as_*` accessor advertises an optional capability and returns `None`
/// unless the implementor opts in. Chain algorithms check them at every step,
/// so a foreign error only has to expose what it actually supports.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use wrappable_core::{ErrorRef, Fault, Unwrappable};
///
/// #[derive(Debug)]
/// struct Retry {
///     attempt: u32,
///     last: ErrorRef,
/// }
///
/// impl fmt::Display for Retry {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "attempt {} failed", self.attempt)
///     }
/// }
///
/// impl std::error::Error for Retry {}
///
/// impl Unwrappable for Retry {
///     fn unwrap_once(&self) -> Option<ErrorRef> {
///         Some(self.last.clone())
///     }
/// }
///
/// impl Fault for Retry {
///     fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
///         Some(self)
///     }
/// }
///
/// let timeout = ErrorRef::msg("timeout");
/// let err = ErrorRef::new(Retry { attempt: 3, last: timeout.clone() });
/// assert_eq!(err.unwrap_once(), Some(timeout));
/// ```
pub trait Fault: Error + Send + Sync + AsAny {
    /// Single-level unwrap capability.
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        None
    }

    /// Topmost-error accessor capability.
    fn as_headed(&self) -> Option<&dyn Headed> {
        None
    }

    /// Tail-append capability.
    fn as_appendable(&self) -> Option<&dyn Appendable> {
        None
    }

    /// Own membership test.
    fn as_self_matching(&self) -> Option<&dyn SelfMatching> {
        None
    }

    /// Own extraction test.
    fn as_self_extracting(&self) -> Option<&dyn SelfExtracting> {
        None
    }

    /// Own root resolution.
    fn as_root_aware(&self) -> Option<&dyn RootAware> {
        None
    }
}

impl dyn Fault {
    /// Unwraps one level, if this fault is [`Unwrappable`].
    pub fn unwrap_once(&self) -> Option<ErrorRef> {
        self.as_unwrappable().and_then(|u| u.unwrap_once())
    }

    /// The topmost error, if this fault is [`Headed`].
    pub fn topmost(&self) -> Option<ErrorRef> {
        self.as_headed().map(|h| h.topmost())
    }

    /// Downcasts to a concrete error type.
    ///
    /// Looks through the [`Foreign`] adapter, so errors brought in with
    /// [`ErrorRef::from_std`] downcast to their original type.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + Send + Sync + 'static,
    {
        let any = AsAny::as_any(self);
        any.downcast_ref::<T>()
            .or_else(|| any.downcast_ref::<Foreign<T>>().map(Foreign::inner))
    }
}
