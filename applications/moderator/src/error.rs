/// Moderator error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModeratorError>;

#[derive(Debug, Error)]
pub enum ModeratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] trailtips_client::ClientError),

    #[error("Render error: {0}")]
    View(#[from] trailtips_views::ViewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ModeratorError {
    fn from(err: config::ConfigError) -> Self {
        ModeratorError::Config(err.to_string())
    }
}
