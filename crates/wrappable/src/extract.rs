//! Type-directed extraction.

use std::any::type_name;

use tracing::{instrument, trace};

use crate::walk::Visited;
use crate::{ChainError, ChainErrorKind, ChainResult, ErrorRef, ErrorSlot, Fault};

/// Stores the first error of `err`'s chain that fits `slot`.
///
/// Each value along the chain is offered to the slot whole, then asked to
/// extract from itself if it can, before the walk moves on by single-level
/// unwrap. The topmost fitting value wins: a node is tried before its head,
/// and its head before its cause. A value whose own extraction already
/// covered what it unwraps to ends the walk.
///
/// # Examples
///
/// ```
/// use wrappable::{ErrorNode, ErrorRef, Message, extract};
///
/// let chain = ErrorRef::new(ErrorNode::new("query").wrap(ErrorRef::msg("timeout")));
///
/// let mut any: Option<ErrorRef> = None;
/// assert!(extract(&chain, &mut any));
/// assert_eq!(any, Some(chain.clone()));
///
/// let mut message: Option<Message> = None;
/// assert!(extract(&chain, &mut message));
/// assert_eq!(message.map(|m| m.to_string()).as_deref(), Some("query"));
/// ```
#[instrument(level = "trace", skip_all, fields(chain = %err))]
pub fn extract(err: &ErrorRef, slot: &mut dyn ErrorSlot) -> bool {
    let mut visited = Visited::default();
    let mut current = err.clone();

    loop {
        if !visited.first_visit(&current) {
            return false;
        }
        if slot.try_assign(&current) {
            trace!(found = %current, "Slot accepted error");
            return true;
        }
        if let Some(extracting) = current.as_self_extracting() {
            if extracting.extract_into(slot) {
                return true;
            }
            if extracting.covers_unwrap() {
                trace!(at = %current, "Extraction covered the rest of the chain");
                return false;
            }
        }
        let Some(next) = current.unwrap_once() else {
            return false;
        };
        current = next;
    }
}

/// The first error of type `T` in `err`'s chain.
///
/// ```
/// use wrappable::{ErrorNode, ErrorRef, find};
///
/// let chain = ErrorRef::new(ErrorNode::new("outer").wrap(ErrorNode::new("inner")));
/// let node = find::<ErrorNode>(&chain).expect("chain is a node");
/// assert_eq!(node.to_string(), "outer: inner");
/// ```
pub fn find<T>(err: &ErrorRef) -> Option<T>
where
    T: Fault + Clone,
{
    let mut slot: Option<T> = None;
    extract(err, &mut slot);
    slot
}

/// Like [`find`], but reports a missing type as an error.
///
/// # Errors
///
/// Returns [`ChainErrorKind::NotFound`] when no error in the chain has type `T`.
#[track_caller]
pub fn require<T>(err: &ErrorRef) -> ChainResult<T>
where
    T: Fault + Clone,
{
    match find(err) {
        Some(found) => Ok(found),
        None => Err(ChainError::new(ChainErrorKind::NotFound {
            expected: type_name::<T>(),
            chain: err.to_string(),
        })),
    }
}
