//! Experience detail page: load, moderate, render.

use crate::alerts::{
    AlertSink, COMMENT_DELETED, COMMENT_DELETE_FAILED, EXPERIENCE_DELETED,
    EXPERIENCE_DELETE_FAILED,
};
use crate::api::ExperienceApi;
use crate::chrome::Chrome;
use crate::error::Result;
use crate::render::render_state;
use crate::state::{PageState, RequestToken};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};
use trailtips_client::{ClientError, DeleteResponse};
use trailtips_core::{CommentId, Experience};

/// Moderation behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ModerationOptions {
    /// Treat a non-2xx DELETE answer as a failure. Off by default: any answer
    /// from the server counts as success.
    #[serde(default)]
    pub check_delete_status: bool,
}

/// What a moderation action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Success alert raised
    Succeeded,
    /// Failure alert raised, state untouched
    Failed,
    /// Nothing to act on; no request sent
    Skipped,
}

/// A load that has been issued but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: RequestToken,
    pub slug: String,
}

impl LoadRequest {
    /// Perform the fetch. Does not touch the page, so it can run on another task.
    pub async fn run(self, api: &dyn ExperienceApi) -> LoadResult {
        let outcome = api.fetch_experience(&self.slug).await;
        LoadResult {
            token: self.token,
            slug: self.slug,
            outcome,
        }
    }
}

/// A finished fetch waiting to be applied with [`ExperienceDetailPage::finish_load`].
#[derive(Debug)]
pub struct LoadResult {
    pub token: RequestToken,
    pub slug: String,
    pub outcome: std::result::Result<Option<Experience>, ClientError>,
}

/// One instance of the experience detail page.
///
/// The page is the single owner of its state. Fetches may run elsewhere
/// (see [`LoadRequest::run`]) but their results are only applied through
/// [`finish_load`](Self::finish_load), which drops anything but the latest
/// request.
pub struct ExperienceDetailPage {
    api: Arc<dyn ExperienceApi>,
    alerts: Arc<dyn AlertSink>,
    options: ModerationOptions,
    state: PageState,
    slug: Option<String>,
    next_token: u64,
    active: Option<RequestToken>,
}

impl ExperienceDetailPage {
    pub fn new(
        api: Arc<dyn ExperienceApi>,
        alerts: Arc<dyn AlertSink>,
        options: ModerationOptions,
    ) -> Self {
        Self {
            api,
            alerts,
            options,
            state: PageState::Idle,
            slug: None,
            next_token: 0,
            active: None,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// The loaded experience, if any.
    pub fn experience(&self) -> Option<&Experience> {
        self.state.experience()
    }

    /// Slug of the most recent load.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Handle to the API, for running a [`LoadRequest`] off the page.
    pub fn api(&self) -> Arc<dyn ExperienceApi> {
        Arc::clone(&self.api)
    }

    /// Start a load for `slug`, superseding any load in flight.
    pub fn mount(&mut self, slug: impl Into<String>) -> LoadRequest {
        let slug = slug.into();
        let token = RequestToken::new(self.next_token);
        self.next_token += 1;

        if let Some(previous) = self.active.replace(token) {
            debug!(previous = %previous, token = %token, "Superseding in-flight load");
        }
        self.slug = Some(slug.clone());
        self.state = PageState::Loading;

        debug!(slug = %slug, token = %token, "Loading experience");
        LoadRequest { token, slug }
    }

    /// Start a load only if `slug` differs from the current one.
    pub fn navigate(&mut self, slug: &str) -> Option<LoadRequest> {
        if self.slug.as_deref() == Some(slug) {
            return None;
        }
        Some(self.mount(slug))
    }

    /// Apply a fetch result. Returns `false` if it was stale and got dropped.
    pub fn finish_load(&mut self, result: LoadResult) -> bool {
        if self.active != Some(result.token) {
            debug!(
                slug = %result.slug,
                token = %result.token,
                "Discarding stale experience response"
            );
            return false;
        }

        self.active = None;
        self.state = PageState::from_fetch(result.outcome);

        match &self.state {
            PageState::Failed(message) => {
                info!(slug = %result.slug, error = %message, "Experience failed to load");
            }
            state => debug!(slug = %result.slug, state = state.name(), "Experience load finished"),
        }
        true
    }

    /// Mount, fetch and apply in one go.
    pub async fn load(&mut self, slug: impl Into<String>) -> &PageState {
        let request = self.mount(slug);
        let api = self.api();
        let result = request.run(api.as_ref()).await;
        self.finish_load(result);
        &self.state
    }

    /// Delete the loaded experience.
    ///
    /// The page keeps showing the experience afterwards; only an alert is
    /// raised.
    pub async fn delete_experience(&self) -> ActionOutcome {
        let Some(id) = self.experience().map(|experience| experience.id) else {
            debug!(state = self.state.name(), "No experience loaded, nothing to delete");
            return ActionOutcome::Skipped;
        };

        match self.api.delete_experience(id).await {
            Ok(response) if self.accepts(response) => {
                self.alerts.alert(EXPERIENCE_DELETED);
                ActionOutcome::Succeeded
            }
            Ok(response) => {
                error!(experience_id = %id, status = response.status, "Error deleting experience");
                self.alerts.alert(EXPERIENCE_DELETE_FAILED);
                ActionOutcome::Failed
            }
            Err(e) => {
                error!(experience_id = %id, error = %e, "Error deleting experience");
                self.alerts.alert(EXPERIENCE_DELETE_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Delete one comment and drop it from the loaded experience.
    ///
    /// The request goes out whatever the page state is; the local list is
    /// only touched once the request has completed.
    pub async fn delete_comment(&mut self, comment_id: CommentId) -> ActionOutcome {
        match self.api.delete_comment(comment_id).await {
            Ok(response) if self.accepts(response) => {
                if let Some(experience) = self.state.experience_mut() {
                    experience.remove_comment(comment_id);
                }
                self.alerts.alert(COMMENT_DELETED);
                ActionOutcome::Succeeded
            }
            Ok(response) => {
                error!(comment_id = %comment_id, status = response.status, "Error deleting comment");
                self.alerts.alert(COMMENT_DELETE_FAILED);
                ActionOutcome::Failed
            }
            Err(e) => {
                error!(comment_id = %comment_id, error = %e, "Error deleting comment");
                self.alerts.alert(COMMENT_DELETE_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Render the current state as HTML.
    pub fn render(&self, chrome: &dyn Chrome) -> Result<String> {
        render_state(&self.state, chrome)
    }

    fn accepts(&self, response: DeleteResponse) -> bool {
        !self.options.check_delete_status || response.is_success()
    }
}
