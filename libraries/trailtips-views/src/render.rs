//! HTML rendering of page state.

use crate::chrome::{Chrome, PAGE_NAME};
use crate::error::Result;
use crate::state::PageState;
use askama::Template;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use trailtips_core::Experience;

#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate<'a> {
    class: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "experience_detail.html")]
struct DetailTemplate<'a> {
    experience: &'a Experience,
    date_of_birth: String,
}

/// Render a page state. Only the populated state goes through `chrome`.
pub fn render_state(state: &PageState, chrome: &dyn Chrome) -> Result<String> {
    if let PageState::Loaded(experience) = state {
        let body = DetailTemplate {
            experience,
            date_of_birth: format_date(&experience.user.date_of_birth),
        }
        .render()?;
        return chrome.wrap(PAGE_NAME, &body);
    }

    let class = if state.error().is_some() {
        "text-center text-red-500 p-4"
    } else {
        "text-center p-4"
    };
    let message = state.status_message().unwrap_or_default();
    Ok(StatusTemplate {
        class,
        message: &message,
    }
    .render()?)
}

/// Format an ISO date or timestamp as `M/D/YYYY`.
///
/// Timestamps are taken at their UTC date. Anything unparseable is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc().date())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
