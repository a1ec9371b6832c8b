// Error types for the diff engine.
//
// Only two conditions are ever "absent" at the public surface: nothing to
// compare, and a rendering mode the engine does not support. The first is
// not an error at all (it is `Ok(None)`); the second is `ModeError`.

use thiserror::Error;

/// A mode selector string that does not match `full`, `compact` or `full:N`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Not one of the recognized keywords (matching is case-sensitive).
    #[error("unknown diff mode '{0}' (expected 'full', 'compact' or 'full:N')")]
    Unknown(String),

    /// `full:` followed by something other than a positive base-10 integer.
    #[error("invalid threshold in diff mode '{0}' (expected a positive integer)")]
    InvalidThreshold(String),
}

/// Errors surfaced by the fallible diff entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error(transparent)]
    InvalidMode(#[from] ModeError),
}
