/// Core error types for the jukebox
use thiserror::Error;

/// Result type alias using `JukeboxError`
pub type Result<T> = std::result::Result<T, JukeboxError>;

/// Error raised by every jukebox operation
///
/// None of these are fatal: each is a recoverable return condition for
/// the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JukeboxError {
    /// Blank or out-of-range value, or a track/album used where it is not
    /// a member of the relevant collection
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of a track that is not present
    #[error("Not found: {0}")]
    NotFound(String),

    /// Action attempted while the jukebox is powered off
    #[error("Illegal operation: {0}")]
    IllegalOperation(String),
}

impl JukeboxError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an illegal operation error
    pub fn illegal_operation(msg: impl Into<String>) -> Self {
        Self::IllegalOperation(msg.into())
    }
}

/// Trim `value` and reject it when nothing is left
pub(crate) fn require_non_blank(value: impl Into<String>, what: &str) -> Result<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JukeboxError::invalid_argument(format!(
            "{what} cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}
