/// Page state for the experience detail view
use std::fmt;
use trailtips_client::ClientError;
use trailtips_core::Experience;

/// Shown for any non-2xx answer to the fetch, whatever the status or body.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch experience";

/// Shown while no fetch has finished.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown when the API answers with a null body.
pub const NOT_FOUND_MESSAGE: &str = "No experience found";

/// Identifies one load. Only the most recently issued token may update the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a page instance is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Experience on screen
    Loaded(Experience),
    /// Fetch succeeded with a null body
    Empty,
    /// Fetch failed; holds the message to display
    Failed(String),
}

impl PageState {
    /// Build the terminal state for a fetch result.
    pub(crate) fn from_fetch(result: Result<Option<Experience>, ClientError>) -> Self {
        match result {
            Ok(Some(experience)) => Self::Loaded(experience),
            Ok(None) => Self::Empty,
            Err(ClientError::ServerError { .. }) => Self::Failed(FETCH_FAILED_MESSAGE.to_string()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Idle renders like Loading: a page is loading from the moment it exists.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn experience(&self) -> Option<&Experience> {
        match self {
            Self::Loaded(experience) => Some(experience),
            _ => None,
        }
    }

    pub(crate) fn experience_mut(&mut self) -> Option<&mut Experience> {
        match self {
            Self::Loaded(experience) => Some(experience),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Status line for every state but `Loaded`.
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Loading => Some(LOADING_MESSAGE.to_string()),
            Self::Empty => Some(NOT_FOUND_MESSAGE.to_string()),
            Self::Failed(message) => Some(format!("Error: {}", message)),
            Self::Loaded(_) => None,
        }
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}
