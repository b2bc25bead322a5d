//! Comment repository port.

use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::foundation::{CommentId, DomainError, LetterId};

/// Repository port for Comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert or replace a comment.
    async fn save(&self, comment: &Comment) -> Result<Comment, DomainError>;

    /// Find a comment by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError>;

    /// Comments on a letter, oldest first.
    async fn find_by_letter(&self, letter_id: &LetterId) -> Result<Vec<Comment>, DomainError>;

    /// Hard-delete a comment. Returns `false` if it did not exist.
    async fn delete(&self, comment: &Comment) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CommentRepository) {}
    }
}
