/// Moderator configuration
use crate::error::{ModeratorError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use trailtips_client::{ClientConfig, DEFAULT_BASE_URL};
use trailtips_views::ModerationOptions;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trailtips.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ModeratorConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default)]
    pub moderation: ModerationOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ModeratorConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `trailtips.toml` is read if
    /// present. Environment variables prefixed `TRAILTIPS_` override both,
    /// with `__` between sections (e.g. `TRAILTIPS_API__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TRAILTIPS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Apply command-line overrides. `None` leaves the loaded value alone.
    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        check_delete_status: Option<bool>,
    ) {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(check) = check_delete_status {
            self.moderation.check_delete_status = check;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ModeratorError::Config(
                "API base URL is required (set TRAILTIPS_API__BASE_URL)".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(ModeratorError::Config(
                "API timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for the HTTP client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone()).with_timeouts(
            Duration::from_secs(self.api.timeout_secs),
            Duration::from_secs(self.api.connect_timeout_secs),
        )
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ModeratorConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            moderation: ModerationOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ModeratorConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert!(!config.moderation.check_delete_status);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file(
            r#"
            [api]
            base_url = "https://api.trailtips.example"
            timeout_secs = 5

            [moderation]
            check_delete_status = true
            "#,
        );

        let config = ModeratorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://api.trailtips.example");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert!(config.moderation.check_delete_status);

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = config_file("[moderation]\ncheck_delete_status = false\n");

        let config = ModeratorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides_switch_delete_status_both_ways() {
        let file = config_file("[moderation]\ncheck_delete_status = true\n");
        let mut config = ModeratorConfig::load(Some(file.path())).unwrap();

        config.apply_overrides(None, None);
        assert!(config.moderation.check_delete_status);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        config.apply_overrides(Some("http://10.0.0.2:5000".to_string()), Some(false));
        assert!(!config.moderation.check_delete_status);
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");

        config.apply_overrides(None, Some(true));
        assert!(config.moderation.check_delete_status);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = ModeratorConfig::load(Some(Path::new("/nonexistent/trailtips.toml")));
        assert!(matches!(result, Err(ModeratorError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_url_and_zero_timeout() {
        let mut config = ModeratorConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ModeratorConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
