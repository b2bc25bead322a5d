//! Comment handlers.

mod create_comment;
mod delete_comment;
mod list_comments;

pub use create_comment::{CreateCommentCommand, CreateCommentHandler};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentHandler};
pub use list_comments::{ListCommentsHandler, ListCommentsQuery};
