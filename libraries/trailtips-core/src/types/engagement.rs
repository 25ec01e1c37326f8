/// Comments, likes and shares attached to an experience
use super::ids::{CommentId, ExperienceId, UserId};
use super::user::User;
use serde::{Deserialize, Serialize};

/// A comment left on an experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier, used to delete it
    pub id: CommentId,
    /// Comment text
    pub content: String,
    /// Experience the comment belongs to
    pub experience_id: ExperienceId,
    /// Author id
    pub user_id: UserId,
    /// Author, denormalized by the API
    pub user: User,
}

/// A like on an experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// Like identifier
    pub id: i64,
    /// Liked experience
    pub experience_id: ExperienceId,
    /// Liker id
    pub user_id: UserId,
    /// Liker profile
    pub user: User,
}

/// A share of an experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Share identifier
    pub id: i64,
    /// Shared experience
    pub experience_id: ExperienceId,
    /// Sharer id
    pub user_id: UserId,
    /// Sharer profile
    pub user: User,
}
