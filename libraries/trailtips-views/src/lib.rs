//! Trailtips Views
//!
//! The experience detail and moderation page.
//!
//! [`ExperienceDetailPage`] owns the page state for one route slug. Loading
//! goes `Idle → Loading → {Loaded, Empty, Failed}`; every load carries a
//! [`RequestToken`] and a response whose token is no longer current is
//! dropped. The two moderation actions call the API and report back through
//! an injected [`AlertSink`]. Markup comes from askama templates, with the
//! surrounding layout supplied by a [`Chrome`] implementation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trailtips_client::{ClientConfig, TrailtipsClient};
//! use trailtips_views::{DefaultLayout, ExperienceDetailPage, ModerationOptions, RecordingAlerts};
//!
//! let client = Arc::new(TrailtipsClient::new(ClientConfig::default())?);
//! let alerts = Arc::new(RecordingAlerts::default());
//! let mut page = ExperienceDetailPage::new(client, alerts.clone(), ModerationOptions::default());
//!
//! page.load("12").await;
//! let html = page.render(&DefaultLayout::default())?;
//! ```

mod alerts;
mod api;
mod chrome;
mod error;
mod page;
mod render;
mod state;

pub use alerts::{
    AlertSink, RecordingAlerts, COMMENT_DELETED, COMMENT_DELETE_FAILED, EXPERIENCE_DELETED,
    EXPERIENCE_DELETE_FAILED,
};
pub use api::ExperienceApi;
pub use chrome::{Chrome, DefaultLayout, PAGE_NAME};
pub use error::{Result, ViewError};
pub use page::{ActionOutcome, ExperienceDetailPage, LoadRequest, LoadResult, ModerationOptions};
pub use render::{format_date, render_state};
pub use state::{
    PageState, RequestToken, FETCH_FAILED_MESSAGE, LOADING_MESSAGE, NOT_FOUND_MESSAGE,
};
