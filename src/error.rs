//! Registration error types
//!
//! Registration failures are programmer errors (mis-declared command paths),
//! so callers are expected to propagate them fatally out of startup code.

use thiserror::Error;

/// Errors raised while registering a command path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// The path contained no segments after whitespace splitting.
    #[error("command path has no segments")]
    EmptyPath,

    /// A path segment begins with the flag prefix character.
    #[error("command segment {0:?} cannot begin with '-'")]
    InvalidSegment(String),

    /// The path already has a handler attached.
    #[error("command {0:?} is already registered")]
    DuplicateCommand(String),
}
