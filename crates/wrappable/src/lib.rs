//! Wrappable error chains.
//!
//! An [`ErrorNode`] stacks causally related errors: the first error wrapped
//! renders leftmost, every later [`wrap`](ErrorNode::wrap) extends the tail.
//! Nodes never change once built, so chains can be shared freely.
//!
//! Chains are queried the way sentinel errors usually are:
//! - [`is`] tests whether a sentinel appears anywhere in a chain
//! - [`extract`] (and the typed [`find`] / [`require`]) pulls out the first
//!   error of a given type
//! - [`root`] and [`ErrorNode::root`] resolve the deepest cause
//!
//! Queries work on any [`Fault`], not just nodes: foreign errors take part
//! through whatever capabilities they expose, single-level unwrap included.
//!
//! # Examples
//!
//! ```
//! use wrappable::{ErrorNode, ErrorRef, is, root};
//!
//! let eof = ErrorRef::msg("EOF");
//! let err2 = ErrorRef::msg("err2");
//!
//! let chain = ErrorNode::new("err1").wrap(&eof).wrap(&err2);
//! assert_eq!(chain.to_string(), "err1: EOF: err2");
//!
//! let chain = ErrorRef::new(chain);
//! assert!(is(&chain, &eof));
//! assert!(is(&chain, &err2));
//! assert!(!is(&chain, &ErrorRef::msg("err2")));
//! assert_eq!(root(&chain), err2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod class;
mod extract;
mod matching;
mod node;
mod root;
mod walk;

pub use extract::{extract, find, require};
pub use matching::is;
pub use node::ErrorNode;
pub use root::root;
pub use walk::unwrap;

pub use wrappable_core::{
    Appendable, AsAny, Capability, ChainError, ChainErrorKind, ChainResult, ErrorRef, ErrorSlot,
    Fault, Foreign, Formatted, Headed, IntoCause, Message, RootAware, SelfExtracting, SelfMatching,
    Unwrappable, errorf,
};
