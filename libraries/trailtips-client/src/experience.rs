//! Experience operations for the Trailtips API.

use crate::client::endpoint;
use crate::error::{ClientError, Result};
use crate::types::{error_message, DeleteResponse};
use reqwest::Client;
use tracing::{debug, info, warn};
use trailtips_core::{Experience, ExperienceId};

/// Experience client for the Trailtips API.
pub struct ExperienceClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> ExperienceClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch one experience with its comments, likes, shares and author.
    ///
    /// `slug` is the route parameter and is used verbatim as the resource id.
    /// A `null` body yields `Ok(None)`.
    pub async fn get_experience(&self, slug: &str) -> Result<Option<Experience>> {
        let url = endpoint(self.base_url, &["api", "experienceTip", slug])?;
        debug!(url = %url, slug = %slug, "Fetching experience");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let experience: Option<Experience> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse experience response: {}", e))
            })?;

            match &experience {
                Some(exp) => debug!(
                    id = %exp.id,
                    comments = exp.comments.len(),
                    likes = exp.likes.len(),
                    shares = exp.shares.len(),
                    "Fetched experience"
                ),
                None => debug!(slug = %slug, "Experience body was null"),
            }

            Ok(experience)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, slug = %slug, "Experience fetch rejected");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_message(&error_text),
            })
        }
    }

    /// Delete an experience.
    ///
    /// Any HTTP answer is returned as a [`DeleteResponse`]; only transport
    /// failures are errors.
    pub async fn delete_experience(&self, id: ExperienceId) -> Result<DeleteResponse> {
        let id_text = id.to_string();
        let url = endpoint(self.base_url, &["api", "experienceTip", &id_text])?;
        debug!(url = %url, experience_id = %id, "Deleting experience");

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
            info!(experience_id = %id, "Experience deleted");
        } else {
            warn!(experience_id = %id, status = outcome.status, "Experience delete returned non-success status");
        }

        Ok(outcome)
    }
}
