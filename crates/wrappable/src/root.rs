//! Package-level root-cause resolution.

use tracing::{instrument, trace};

use crate::ErrorRef;
use crate::walk::Visited;

/// The root cause of `err`: the deepest error reachable by unwrapping.
///
/// Hands over to `err`'s own [`RootAware`](crate::RootAware) resolution if it
/// has one. Otherwise walks single-level unwraps and hands over to the first
/// root-aware value met on the way; failing that, the last value reached is
/// the root.
///
/// # Examples
///
/// ```
/// use wrappable::{ErrorRef, errorf, root};
///
/// let pipe = ErrorRef::msg("closed pipe");
/// let err = errorf!(wraps: errorf!(wraps: pipe.clone(), "flush: {}", pipe), "close");
///
/// assert_eq!(root(&err), pipe);
/// ```
#[instrument(level = "trace", skip_all, fields(chain = %err))]
pub fn root(err: &ErrorRef) -> ErrorRef {
    if let Some(rooted) = err.as_root_aware() {
        trace!("Delegating to root-aware error");
        return rooted.root();
    }

    let mut visited = Visited::default();
    visited.first_visit(err);
    let mut last = err.clone();
    let mut next = err.unwrap_once();

    while let Some(current) = next {
        if !visited.first_visit(&current) {
            break;
        }
        if let Some(rooted) = current.as_root_aware() {
            trace!(at = %current, "Delegating to root-aware cause");
            return rooted.root();
        }
        next = current.unwrap_once();
        last = current;
    }

    last
}
