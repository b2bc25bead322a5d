//! Comment domain module.
//!
//! Replies to a letter by accepted members of the letter's Colli.

mod aggregate;
mod events;

pub use aggregate::{Comment, MAX_COMMENT_LENGTH};
pub use events::CommentAdded;
