//! The API seam the page talks through.

use async_trait::async_trait;
use trailtips_client::{DeleteResponse, Result, TrailtipsClient};
use trailtips_core::{CommentId, Experience, ExperienceId};

/// Operations the detail page needs from the platform API.
///
/// Implemented by [`TrailtipsClient`]; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceApi: Send + Sync {
    /// Fetch one experience aggregate by route slug. `Ok(None)` for a null body.
    async fn fetch_experience(&self, slug: &str) -> Result<Option<Experience>>;

    /// Delete an experience; any HTTP answer is `Ok`.
    async fn delete_experience(&self, id: ExperienceId) -> Result<DeleteResponse>;

    /// Delete one comment; any HTTP answer is `Ok`.
    async fn delete_comment(&self, id: CommentId) -> Result<DeleteResponse>;
}

#[async_trait]
impl ExperienceApi for TrailtipsClient {
    async fn fetch_experience(&self, slug: &str) -> Result<Option<Experience>> {
        self.experiences().get_experience(slug).await
    }

    async fn delete_experience(&self, id: ExperienceId) -> Result<DeleteResponse> {
        self.experiences().delete_experience(id).await
    }

    async fn delete_comment(&self, id: CommentId) -> Result<DeleteResponse> {
        self.comments().delete_comment(id).await
    }
}
