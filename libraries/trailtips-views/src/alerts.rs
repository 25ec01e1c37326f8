//! User-facing alerts raised by moderation actions.

use std::sync::{Mutex, PoisonError};

pub const EXPERIENCE_DELETED: &str = "Experience deleted successfully.";
pub const EXPERIENCE_DELETE_FAILED: &str = "Failed to delete experience.";
pub const COMMENT_DELETED: &str = "Comment deleted successfully.";
pub const COMMENT_DELETE_FAILED: &str = "Failed to delete comment.";

/// Somewhere to show a one-line message to the moderator.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Keeps every alert in order of arrival.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    /// Alerts raised so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent alert.
    pub fn last(&self) -> Option<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let alerts = RecordingAlerts::default();
        assert!(alerts.last().is_none());

        alerts.alert(COMMENT_DELETED);
        alerts.alert(EXPERIENCE_DELETE_FAILED);

        assert_eq!(
            alerts.messages(),
            vec![COMMENT_DELETED.to_string(), EXPERIENCE_DELETE_FAILED.to_string()]
        );
        assert_eq!(alerts.last().as_deref(), Some(EXPERIENCE_DELETE_FAILED));
    }
}
