//! Core error types for Trailtips

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Trailtips
#[derive(Error, Debug)]
pub enum CoreError {
    /// An identifier could not be parsed
    #[error("Invalid {entity} id: {value}")]
    InvalidId {
        /// Kind of record the id belongs to
        entity: String,
        /// Text that failed to parse
        value: String,
    },
}

impl CoreError {
    /// Create an invalid id error
    pub fn invalid_id(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidId {
            entity: entity.into(),
            value: value.into(),
        }
    }
}
