//! Letter domain module.
//!
//! Text or file posts published inside an active Colli by accepted members.
//! Letters reference their Colli by ID only.

mod aggregate;
mod events;

pub use aggregate::{Letter, LetterType, MAX_CONTENT_LENGTH, MIN_TEXT_LENGTH};
pub use events::LetterCreated;
