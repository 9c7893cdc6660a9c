use thiserror::Error;

/// Errors returned by positional list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The supplied 1-based position is outside the valid range for the
    /// list's current length. Insertion accepts `1..=len + 1`; removal
    /// accepts `1..=len`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
