//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, caller-visible failures. Loading files
/// and building XML have their own error types in the crates that do that work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied value was rejected (e.g. a size name the catalog does not know).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The marketplace does not accept `size_name`.
    pub fn unsupported_size(size_name: &str) -> Self {
        Self::invalid_input(format!(
            "size `{size_name}` is not supported by the catalog"
        ))
    }
}
