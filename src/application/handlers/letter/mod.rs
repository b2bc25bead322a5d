//! Letter handlers.

mod create_letter;
mod delete_letter;
mod list_letters;

pub use create_letter::{CreateLetterCommand, CreateLetterHandler, LetterBody};
pub use delete_letter::{DeleteLetterCommand, DeleteLetterHandler};
pub use list_letters::{ListLettersHandler, ListLettersQuery};
