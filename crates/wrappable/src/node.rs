//! The immutable chain link.

use std::error::Error;
use std::fmt;

use derive_getters::Getters;
use tracing::{instrument, trace};

use crate::walk::Visited;
use crate::{
    Appendable, ErrorRef, ErrorSlot, Fault, Formatted, Headed, IntoCause, RootAware,
    SelfExtracting, SelfMatching, Unwrappable, extract, is, matching,
};

/// A stack of causally related errors.
///
/// `head` is the error at this position, `cause` the rest of the stack.
/// Rendering is `head: cause`, recursively, so the first error wrapped
/// shows up leftmost and the latest one rightmost.
///
/// Nodes are never mutated: [`wrap`](Self::wrap) returns a new node that
/// shares every untouched part of the old one.
///
/// # Examples
///
/// ```
/// use wrappable::{ErrorNode, ErrorRef};
///
/// let timeout = ErrorRef::msg("timeout");
/// let err = ErrorNode::new("fetch failed").wrap(&timeout);
///
/// assert_eq!(err.to_string(), "fetch failed: timeout");
/// assert_eq!(err.head().to_string(), "fetch failed");
/// assert!(err.is(&timeout));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ErrorNode {
    /// The error occupying this position in the stack.
    head: ErrorRef,
    /// The next error in the stack; `None` for a terminal node.
    cause: Option<ErrorRef>,
}

impl ErrorNode {
    /// A terminal node holding a new plain error.
    ///
    /// Calling this twice with the same text yields two errors that never
    /// match each other.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_error(ErrorRef::msg(message))
    }

    /// A terminal node holding `err` as is.
    pub fn from_error(err: impl Into<ErrorRef>) -> Self {
        Self {
            head: err.into(),
            cause: None,
        }
    }

    /// Appends `err` at the tail of the stack.
    ///
    /// Wrapping nothing returns an equal node. Otherwise every error already
    /// in the stack is kept in order and `err` becomes the new last one,
    /// however the existing tail was built:
    /// - a tail that can append on its own is asked to
    /// - a tail that only unwraps one level is rebuilt as a node around its
    ///   unwrapped value, then appended to
    /// - an opaque tail becomes the head of a new node whose cause is `err`
    ///
    /// A tail whose unwrap leads back to itself is taken apart once, then
    /// treated as opaque.
    #[instrument(level = "trace", skip_all, fields(chain = %self))]
    pub fn wrap(&self, err: impl IntoCause) -> Self {
        let Some(err) = err.into_cause() else {
            trace!("Nothing to wrap");
            return self.clone();
        };

        self.append_tracked(err, &mut Visited::default())
    }

    /// Appends `err`, remembering which unwrappable causes were already
    /// taken apart so a looping unwrap cannot recurse forever.
    fn append_tracked(&self, err: ErrorRef, visited: &mut Visited) -> Self {
        let cause = match &self.cause {
            None => err,
            Some(cause) => Self::append_to(cause, err, visited),
        };

        Self {
            head: self.head.clone(),
            cause: Some(cause),
        }
    }

    fn append_to(cause: &ErrorRef, err: ErrorRef, visited: &mut Visited) -> ErrorRef {
        if let Some(node) = cause.downcast_ref::<ErrorNode>() {
            trace!(strategy = "append", "Appending through cause");
            return ErrorRef::new(node.append_tracked(err, visited));
        }
        if let Some(appendable) = cause.as_appendable() {
            trace!(strategy = "append", "Appending through cause");
            return appendable.append(err);
        }

        let unwrappable = cause
            .as_unwrappable()
            .filter(|_| visited.first_visit(cause));
        let tail = match unwrappable {
            Some(unwrappable) => {
                trace!(strategy = "destructure", cause = %cause, "Rebuilding unwrappable cause");
                Self {
                    head: cause.clone(),
                    cause: unwrappable.unwrap_once(),
                }
            }
            None => {
                trace!(strategy = "leaf", "Wrapping opaque cause");
                Self::from_error(cause.clone())
            }
        };

        ErrorRef::new(tail.append_tracked(err, visited))
    }

    /// Appends a new error built from formatted text.
    ///
    /// ```
    /// use wrappable::ErrorNode;
    ///
    /// let err = ErrorNode::new("sync").errorf(format_args!("{} pending", 3));
    /// assert_eq!(err.to_string(), "sync: 3 pending");
    /// ```
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Self {
        self.wrap(Formatted::new(args.to_string()))
    }

    /// Unwraps one level: the cause, or the head of a terminal node.
    pub fn unwrap_once(&self) -> ErrorRef {
        self.cause.clone().unwrap_or_else(|| self.head.clone())
    }

    /// Whether `target` is anywhere in this stack.
    pub fn is(&self, target: &ErrorRef) -> bool {
        matching::matches_from(self, target)
    }

    /// The root cause, resolved locally.
    ///
    /// Walks single-level unwraps from this node. At each step the topmost
    /// error of a [`Headed`] value is kept rather than the value itself, so
    /// nested stacks contribute their head.
    ///
    /// This can disagree with the package-level [`root`](crate::root), which
    /// hands over to the first root-aware value it meets instead.
    #[instrument(level = "trace", skip_all, fields(chain = %self))]
    pub fn root(&self) -> ErrorRef {
        let mut visited = Visited::default();
        visited.mark(self);
        let mut last = self.head.clone();
        let mut next = Some(self.unwrap_once());

        while let Some(current) = next {
            if !visited.first_visit(&current) {
                break;
            }
            last = current.topmost().unwrap_or_else(|| current.clone());
            next = current.unwrap_once();
        }

        trace!(root = %last, "Resolved node root");
        last
    }
}

impl fmt::Display for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            None => write!(f, "{}", self.head),
            Some(cause) => write!(f, "{}: {}", self.head, cause),
        }
    }
}

impl Error for ErrorNode {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl Unwrappable for ErrorNode {
    fn unwrap_once(&self) -> Option<ErrorRef> {
        Some(ErrorNode::unwrap_once(self))
    }
}

impl Headed for ErrorNode {
    fn topmost(&self) -> ErrorRef {
        self.head.clone()
    }
}

impl Appendable for ErrorNode {
    fn append(&self, err: ErrorRef) -> ErrorRef {
        ErrorRef::new(self.wrap(err))
    }
}

impl SelfMatching for ErrorNode {
    /// Topmost match wins: the node itself, then its head, then a target node
    /// whose head matches ours, and only then the cause.
    fn is_match(&self, target: &ErrorRef) -> bool {
        if target.points_to(self) || is(&self.head, target) {
            return true;
        }

        if let Some(other) = target.downcast_ref::<ErrorNode>() {
            if is(&self.head, &other.head) {
                trace!(head = %self.head, "Matched target node on its head");
                return true;
            }
        }

        is(self.cause.as_ref(), target)
    }

    /// The head and the cause are both searched in full, and one of them is
    /// what the node unwraps to.
    fn covers_unwrap(&self) -> bool {
        true
    }
}

impl SelfExtracting for ErrorNode {
    /// The node itself, then its head, then its cause.
    ///
    /// The node is offered as a new handle, so a general slot filled here
    /// holds a copy with its own identity. Walks offer the caller's handle
    /// first; this copy only matters for classes built on a node.
    ///
    /// A head is searched past its own value only when it extracts on its
    /// own, as nested nodes do. A terminal node unwraps to its head, so there
    /// the head's whole chain is searched.
    fn extract_into(&self, slot: &mut dyn ErrorSlot) -> bool {
        if slot.try_assign(&ErrorRef::new(self.clone())) {
            return true;
        }

        let Some(cause) = &self.cause else {
            return extract(&self.head, slot);
        };

        slot.try_assign(&self.head)
            || self
                .head
                .as_self_extracting()
                .is_some_and(|nested| nested.extract_into(slot))
            || extract(cause, slot)
    }

    /// What the node unwraps to, cause or terminal head, is searched in full.
    fn covers_unwrap(&self) -> bool {
        true
    }
}

impl RootAware for ErrorNode {
    fn root(&self) -> ErrorRef {
        ErrorNode::root(self)
    }
}

impl Fault for ErrorNode {
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        Some(self)
    }

    fn as_headed(&self) -> Option<&dyn Headed> {
        Some(self)
    }

    fn as_appendable(&self) -> Option<&dyn Appendable> {
        Some(self)
    }

    fn as_self_matching(&self) -> Option<&dyn SelfMatching> {
        Some(self)
    }

    fn as_self_extracting(&self) -> Option<&dyn SelfExtracting> {
        Some(self)
    }

    fn as_root_aware(&self) -> Option<&dyn RootAware> {
        Some(self)
    }
}
