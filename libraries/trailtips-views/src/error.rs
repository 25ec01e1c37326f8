//! Error types for the views crate.

use thiserror::Error;
use trailtips_client::ClientError;

/// Errors raised while driving or rendering a page.
#[derive(Error, Debug)]
pub enum ViewError {
    /// Template rendering failed
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    /// API call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
