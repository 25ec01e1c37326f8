/// User domain type
use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Gender as recorded on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// User profile, as embedded in experiences and their comments, likes and shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Contact email
    pub email: String,

    /// Password hash as leaked by the API. Accepted so payloads parse, never
    /// rendered and never written back out.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Display name
    pub name: String,

    /// Postal address
    pub address: String,

    /// Free-form interest tags
    pub interests: Vec<String>,

    /// Profile image URLs; the first one is the avatar
    pub images_profile: Vec<String>,

    /// Recorded gender
    pub gender: Gender,

    /// Short biography
    pub bio: String,

    /// Contact phone number
    pub phone_number: String,

    /// Date of birth (ISO string)
    pub date_of_birth: String,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}

impl User {
    /// The avatar URL, if the user has any profile image
    pub fn avatar(&self) -> Option<&str> {
        self.images_profile.first().map(String::as_str)
    }

    /// Interests joined for display
    pub fn interests_text(&self) -> String {
        self.interests.join(", ")
    }
}
