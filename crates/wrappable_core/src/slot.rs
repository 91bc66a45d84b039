//! Extraction targets.
//!
//! A slot decides which errors it can hold. Two shapes exist: general slots
//! take whatever they are offered first (the whole value, as a handle), and
//! concrete slots only take a value whose dynamic type is exactly theirs.

use crate::{ErrorRef, Fault};

/// A settable location that type-directed extraction writes into.
///
/// Only error-capable shapes implement this trait, so a target that could
/// not hold an error is rejected at compile time.
pub trait ErrorSlot {
    /// Stores `candidate` if its type fits and reports whether it did.
    fn try_assign(&mut self, candidate: &ErrorRef) -> bool;
}

/// General shape: any error fits.
impl ErrorSlot for Option<ErrorRef> {
    fn try_assign(&mut self, candidate: &ErrorRef) -> bool {
        *self = Some(candidate.clone());
        true
    }
}

/// Concrete shape: only an exact `T` fits.
impl<T> ErrorSlot for Option<T>
where
    T: Fault + Clone,
{
    fn try_assign(&mut self, candidate: &ErrorRef) -> bool {
        match candidate.downcast_ref::<T>() {
            Some(found) => {
                *self = Some(found.clone());
                true
            }
            None => false,
        }
    }
}

/// Capability shape: any error satisfying a predicate fits.
///
/// Stands in for an interface-typed target, where compatibility is about
/// what a value can do rather than what it is.
///
/// # Examples
///
/// ```
/// use wrappable_core::{Capability, ErrorRef, ErrorSlot, errorf};
///
/// let inner = ErrorRef::msg("disk full");
/// let outer = errorf!(wraps: inner, "write failed");
///
/// let mut unwrappable = Capability::new(|f| f.as_unwrappable().is_some());
/// assert!(!unwrappable.try_assign(&ErrorRef::msg("leaf")));
/// assert!(unwrappable.try_assign(&outer));
/// assert_eq!(unwrappable.found(), Some(&outer));
/// ```
#[derive(Debug, Clone)]
pub struct Capability<F> {
    accepts: F,
    found: Option<ErrorRef>,
}

impl<F> Capability<F> {
    /// An empty slot accepting whatever `accepts` approves.
    pub fn new(accepts: F) -> Self
    where
        F: Fn(&dyn Fault) -> bool,
    {
        Self {
            accepts,
            found: None,
        }
    }

    /// The accepted error, if any.
    pub fn found(&self) -> Option<&ErrorRef> {
        self.found.as_ref()
    }

    /// Consumes the slot, returning the accepted error.
    pub fn into_found(self) -> Option<ErrorRef> {
        self.found
    }
}

impl<F> ErrorSlot for Capability<F>
where
    F: Fn(&dyn Fault) -> bool,
{
    fn try_assign(&mut self, candidate: &ErrorRef) -> bool {
        if !(self.accepts)(candidate.as_fault()) {
            return false;
        }
        self.found = Some(candidate.clone());
        true
    }
}
