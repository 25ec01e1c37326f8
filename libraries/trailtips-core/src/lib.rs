//! Trailtips Core
//!
//! Domain types and error handling shared by the Trailtips client and views.
//!
//! The platform lets people publish outdoor *experiences* and *tips*. An
//! [`Experience`] is an aggregate root: it embeds its author, its comments,
//! its likes and its shares, and is fetched from the API as one unit.
//!
//! # Example
//!
//! ```rust
//! use trailtips_core::types::{Category, Experience};
//!
//! let json = r#"{
//!     "id": 7, "title": "Tarp pitch", "content": "A-frame in the rain",
//!     "imagesUrl": [], "location": "Lake District", "category": "Tips",
//!     "filterCategory": "ShelterAndSleeping", "likeCounter": 3,
//!     "shareCounter": 1, "userId": 2, "createdAt": "2024-05-01T10:00:00Z",
//!     "user": {
//!         "id": 2, "email": "ada@example.com", "name": "Ada",
//!         "address": "Keswick", "interests": [], "imagesProfile": [],
//!         "gender": "Female", "bio": "", "phoneNumber": "",
//!         "dateOfBirth": "1990-04-12", "createdAt": "2023-01-01T00:00:00Z"
//!     },
//!     "comments": [], "likes": [], "shares": []
//! }"#;
//!
//! let experience: Experience = serde_json::from_str(json).unwrap();
//! assert_eq!(experience.category, Category::Tips);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};

pub use types::{
    Category, Comment, CommentId, Experience, ExperienceId, FilterCategory, Gender, Like, Share,
    User, UserId,
};
