//! Comment operations for the Trailtips API.

use crate::client::endpoint;
use crate::error::{ClientError, Result};
use crate::types::DeleteResponse;
use reqwest::Client;
use tracing::{debug, info, warn};
use trailtips_core::CommentId;

/// Comment client for the Trailtips API.
pub struct CommentClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> CommentClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Delete a single comment.
    pub async fn delete_comment(&self, id: CommentId) -> Result<DeleteResponse> {
        let id_text = id.to_string();
        let url = endpoint(self.base_url, &["api", "comment", &id_text])?;
        debug!(url = %url, comment_id = %id, "Deleting comment");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let outcome = DeleteResponse {
            status: response.status().as_u16(),
        };

        if outcome.is_success() {
            info!(comment_id = %id, "Comment deleted");
        } else {
            warn!(comment_id = %id, status = outcome.status, "Comment delete returned non-success status");
        }

        Ok(outcome)
    }
}
