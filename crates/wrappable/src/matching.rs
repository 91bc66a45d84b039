//! Sentinel membership.

use tracing::{instrument, trace};

use crate::walk::Visited;
use crate::{ErrorRef, Fault};

/// Reports whether `target` appears anywhere in `err`'s chain.
///
/// Two absent errors match; an absent error never matches a present one.
/// Otherwise each value along the chain is compared by identity, then asked
/// through its own membership test if it has one, and the walk moves on by
/// single-level unwrap until that is no longer possible. A value whose own
/// test already covered what it unwraps to ends the walk.
///
/// # Examples
///
/// ```
/// use wrappable::{ErrorNode, ErrorRef, is};
///
/// let eof = ErrorRef::msg("EOF");
/// let chain = ErrorRef::new(ErrorNode::new("read").wrap(&eof));
///
/// assert!(is(&chain, &eof));
/// assert!(is(&chain, &chain));
/// assert!(!is(&chain, None::<&ErrorRef>));
/// assert!(is(None::<&ErrorRef>, None::<&ErrorRef>));
/// ```
#[instrument(level = "trace", skip_all)]
pub fn is<'a>(
    err: impl Into<Option<&'a ErrorRef>>,
    target: impl Into<Option<&'a ErrorRef>>,
) -> bool {
    match (err.into(), target.into()) {
        (None, None) => true,
        (Some(err), Some(target)) => matches_from(err.as_fault(), target),
        _ => false,
    }
}

/// Walks the chain starting at `start`, which need not be behind a handle.
pub(crate) fn matches_from(start: &dyn Fault, target: &ErrorRef) -> bool {
    let mut visited = Visited::default();
    visited.mark(start);
    if let Some(found) = settle(start, target) {
        return found;
    }

    let mut next = start.unwrap_once();
    while let Some(current) = next {
        if !visited.first_visit(&current) {
            return false;
        }
        if let Some(found) = settle(current.as_fault(), target) {
            return found;
        }
        next = current.unwrap_once();
    }

    false
}

/// `Some` once `err` decides the answer for the rest of its chain.
fn settle(err: &dyn Fault, target: &ErrorRef) -> Option<bool> {
    if target.points_to(err) {
        return Some(true);
    }

    let matcher = err.as_self_matching()?;
    if matcher.is_match(target) {
        Some(true)
    } else if matcher.covers_unwrap() {
        trace!(at = %err, "Membership test covered the rest of the chain");
        Some(false)
    } else {
        None
    }
}
