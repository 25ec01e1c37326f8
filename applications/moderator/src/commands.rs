/// Subcommand implementations, one page load each
use crate::config::ModeratorConfig;
use crate::error::Result;
use std::sync::Arc;
use tracing::{info, warn};
use trailtips_client::TrailtipsClient;
use trailtips_core::CommentId;
use trailtips_views::{ActionOutcome, AlertSink, Chrome, ExperienceDetailPage, PageState};

/// Build a page backed by the configured API.
pub fn open_page(
    config: &ModeratorConfig,
    alerts: Arc<dyn AlertSink>,
) -> Result<ExperienceDetailPage> {
    let client = TrailtipsClient::new(config.client_config())?;
    Ok(ExperienceDetailPage::new(Arc::new(client), alerts, config.moderation))
}

/// Load `slug` and render the page.
pub async fn show(page: &mut ExperienceDetailPage, slug: &str, chrome: &dyn Chrome) -> Result<String> {
    page.load(slug).await;
    Ok(page.render(chrome)?)
}

/// Load `slug`, then delete the experience it resolves to.
pub async fn delete_experience(page: &mut ExperienceDetailPage, slug: &str) -> ActionOutcome {
    page.load(slug).await;
    let outcome = page.delete_experience().await;

    if outcome == ActionOutcome::Skipped {
        warn!(slug = %slug, state = page.state().name(), "Experience not loaded; delete skipped");
    }
    outcome
}

/// Load `slug`, then delete one of its comments.
///
/// Returns the outcome and the number of comments left on the page, if an
/// experience is loaded.
pub async fn delete_comment(
    page: &mut ExperienceDetailPage,
    slug: &str,
    comment_id: CommentId,
) -> (ActionOutcome, Option<usize>) {
    page.load(slug).await;

    if let PageState::Loaded(experience) = page.state() {
        if !experience.comments.iter().any(|c| c.id == comment_id) {
            info!(slug = %slug, comment_id = %comment_id, "Comment not on this experience; deleting anyway");
        }
    }

    let outcome = page.delete_comment(comment_id).await;
    let remaining = page.experience().map(|experience| experience.comment_count());
    (outcome, remaining)
}

/// One-line description of a page that could not be acted on.
pub fn describe_state(state: &PageState) -> String {
    match state {
        PageState::Loaded(experience) => format!("{} (#{})", experience.title, experience.id),
        other => other.status_message().unwrap_or_default(),
    }
}
