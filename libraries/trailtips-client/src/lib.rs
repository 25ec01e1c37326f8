//! Trailtips Client
//!
//! HTTP client library for the Trailtips platform API.
//!
//! # Features
//!
//! - **Experiences**: fetch one experience aggregate, delete an experience
//! - **Comments**: delete a single comment
//!
//! DELETE calls report the raw HTTP status through [`DeleteResponse`]; whether a
//! non-2xx status counts as a failure is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use trailtips_client::{ClientConfig, TrailtipsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrailtipsClient::new(ClientConfig::default())?;
//!
//!     if let Some(experience) = client.experiences().get_experience("12").await? {
//!         println!("{} ({} comments)", experience.title, experience.comments.len());
//!     }
//!
//!     let response = client.comments().delete_comment(42.into()).await?;
//!     println!("DELETE returned {}", response.status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod comment;
mod error;
mod experience;
mod types;

pub use client::TrailtipsClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, DeleteResponse, DEFAULT_BASE_URL};

// Re-export sub-clients for direct use if needed
pub use comment::CommentClient;
pub use experience::ExperienceClient;
