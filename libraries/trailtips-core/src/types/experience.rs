/// Experience aggregate
use super::category::{Category, FilterCategory};
use super::engagement::{Comment, Like, Share};
use super::ids::{CommentId, ExperienceId, UserId};
use super::user::User;
use serde::{Deserialize, Serialize};

/// An experience or tip together with its author and engagement.
///
/// `like_counter` and `share_counter` are maintained by the server and are
/// not derived from `likes`/`shares`, which may be partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Experience identifier
    pub id: ExperienceId,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Gallery image URLs, in display order
    pub images_url: Vec<String>,
    /// Free-form place name
    pub location: String,
    /// Experience or tip
    pub category: Category,
    /// Topic filter
    pub filter_category: FilterCategory,
    /// Server-side like count
    pub like_counter: i64,
    /// Server-side share count
    pub share_counter: i64,
    /// Author id
    pub user_id: UserId,
    /// Creation timestamp (ISO string)
    pub created_at: String,
    /// Author
    pub user: User,
    /// Comments, oldest first
    pub comments: Vec<Comment>,
    /// Likes as embedded by the API
    pub likes: Vec<Like>,
    /// Shares as embedded by the API
    pub shares: Vec<Share>,
}

impl Experience {
    /// Number of comments currently held
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Drop every comment with the given id, keeping the others in order.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_comment(&mut self, comment_id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id != comment_id);
        self.comments.len() != before
    }
}
