//! Domain types: experiences, their authors and engagement

mod category;
mod engagement;
mod experience;
mod ids;
mod user;

pub use category::{Category, FilterCategory};
pub use engagement::{Comment, Like, Share};
pub use experience::Experience;
pub use ids::{CommentId, ExperienceId, UserId};
pub use user::{Gender, User};
