//! Layout chrome wrapped around a populated page.

use crate::error::Result;
use askama::Template;

/// Breadcrumb name of the experience detail page.
pub const PAGE_NAME: &str = "ExperienceDetails";

/// Presentational wrapper: takes a page title and already-rendered body HTML.
pub trait Chrome: Send + Sync {
    fn wrap(&self, page_title: &str, body: &str) -> Result<String>;
}

/// Admin layout with a breadcrumb trail.
#[derive(Debug, Clone)]
pub struct DefaultLayout {
    /// Label of the breadcrumb root link
    pub home_label: String,
    /// Target of the breadcrumb root link
    pub home_href: String,
}

impl Default for DefaultLayout {
    fn default() -> Self {
        Self {
            home_label: "Dashboard".to_string(),
            home_href: "/".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    home_label: &'a str,
    home_href: &'a str,
    page_title: &'a str,
    body: &'a str,
}

impl Chrome for DefaultLayout {
    fn wrap(&self, page_title: &str, body: &str) -> Result<String> {
        let template = LayoutTemplate {
            home_label: &self.home_label,
            home_href: &self.home_href,
            page_title,
            body,
        };
        Ok(template.render()?)
    }
}
