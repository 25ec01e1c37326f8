/// Trailtips Moderator - command-line moderation of experiences
pub mod alerts;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{ModeratorError, Result};
