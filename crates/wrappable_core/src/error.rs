//! Errors raised by chain queries.

use derive_getters::Getters;

use crate::Fault;

/// Specific chain query failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChainErrorKind {
    /// Nothing in the chain has the requested concrete type
    #[display("No {} in chain '{}'", expected, chain)]
    NotFound {
        /// Type name that was requested
        expected: &'static str,
        /// Rendering of the searched chain
        chain: String,
    },
}

/// Chain error with location tracking.
///
/// # Examples
///
/// ```
/// use wrappable_core::{ChainError, ChainErrorKind};
///
/// let err = ChainError::new(ChainErrorKind::NotFound {
///     expected: "Timeout",
///     chain: "fetch: EOF".to_string(),
/// });
/// assert!(err.to_string().starts_with("Chain Error: No Timeout in chain 'fetch: EOF'"));
/// assert!(matches!(err.kind(), ChainErrorKind::NotFound { expected: "Timeout", .. }));
/// ```
#[derive(Debug, Clone, Getters, derive_more::Display, derive_more::Error)]
#[display("Chain Error: {} at line {} in {}", kind, line, file)]
pub struct ChainError {
    /// The kind of error that occurred
    kind: ChainErrorKind,
    /// Line number where the error was created
    line: u32,
    /// File where the error was created
    file: &'static str,
}

impl ChainError {
    /// Create a new chain error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ChainErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl Fault for ChainError {}

/// Result type for chain queries.
pub type ChainResult<T> = std::result::Result<T, ChainError>;
