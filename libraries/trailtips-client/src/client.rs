//! Main Trailtips API client.

use crate::comment::CommentClient;
use crate::error::{ClientError, Result};
use crate::experience::ExperienceClient;
use crate::types::ClientConfig;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Client for the Trailtips platform API.
///
/// Holds one pooled HTTP client and the normalized base URL; the
/// per-resource clients borrow both.
///
/// # Example
///
/// ```ignore
/// use trailtips_client::{ClientConfig, TrailtipsClient};
///
/// let client = TrailtipsClient::new(ClientConfig::new("http://127.0.0.1:5000"))?;
/// let experience = client.experiences().get_experience("3").await?;
/// ```
#[derive(Debug, Clone)]
pub struct TrailtipsClient {
    http: Client,
    base_url: String,
}

impl TrailtipsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("TrailtipsModerator/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(url = %url, "Created Trailtips client");

        Ok(Self {
            http,
            base_url: url,
        })
    }

    /// Get the normalized base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Experience operations.
    pub fn experiences(&self) -> ExperienceClient<'_> {
        ExperienceClient::new(&self.http, &self.base_url)
    }

    /// Comment operations.
    pub fn comments(&self) -> CommentClient<'_> {
        CommentClient::new(&self.http, &self.base_url)
    }
}

/// Build `{base}/{segments...}`, percent-encoding each segment.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base URL", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(TrailtipsClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(TrailtipsClient::new(ClientConfig::new("http://127.0.0.1:5000")).is_ok());

        // Invalid URLs
        assert!(TrailtipsClient::new(ClientConfig::new("")).is_err());
        assert!(TrailtipsClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(TrailtipsClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = TrailtipsClient::new(ClientConfig::new("http://127.0.0.1:5000/")).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = endpoint("http://127.0.0.1:5000", &["api", "comment", "42"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/comment/42");

        let url = endpoint("https://example.com/admin", &["api", "experienceTip", "7"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/admin/api/experienceTip/7");
    }

    #[test]
    fn test_endpoint_encodes_slug() {
        let url = endpoint("http://localhost", &["api", "experienceTip", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/experienceTip/a%20b%2Fc");
    }
}
