//! Single-level unwrap and cycle protection for chain walks.

use std::collections::HashSet;

use tracing::debug;

use crate::{ErrorRef, Fault};

/// Unwraps one level of `err`, if it exposes that capability.
///
/// A terminal [`ErrorNode`](crate::ErrorNode) unwraps to its own head rather
/// than to `None`, so repeated calls are not a termination test; use
/// [`ErrorNode::cause`](crate::ErrorNode::cause) for that.
pub fn unwrap(err: &ErrorRef) -> Option<ErrorRef> {
    err.unwrap_once()
}

/// Identities already seen during one walk.
///
/// A well-formed chain never revisits a value, so a repeat can only come
/// from an external fault whose unwrap loops back on itself.
///
/// Every visited handle is held until the walk ends. An unwrap may hand out
/// a fresh allocation each time, and a released one could otherwise be
/// reused at an address already recorded.
#[derive(Debug, Default)]
pub(crate) struct Visited {
    seen: HashSet<*const ()>,
    held: Vec<ErrorRef>,
}

impl Visited {
    /// Records `err`, returning `false` if the walk has been here before.
    pub(crate) fn first_visit(&mut self, err: &ErrorRef) -> bool {
        let fresh = self.seen.insert(address(err.as_fault()));
        if fresh {
            self.held.push(err.clone());
        } else {
            debug!(error = %err, visited = self.held.len(), "Unwrap cycle detected, stopping walk");
        }
        fresh
    }

    /// Records a borrowed starting point, which outlives the walk.
    pub(crate) fn mark(&mut self, fault: &dyn Fault) {
        self.seen.insert(address(fault));
    }
}

fn address(fault: &dyn Fault) -> *const () {
    std::ptr::from_ref(fault).cast::<()>()
}
