//! Comment aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    validate_text, CommentId, LetterId, Timestamp, UserId, ValidationError,
};

/// Maximum length of a comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// A reply to a letter.
///
/// # Invariants
///
/// - `content` is 1-5000 characters after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    letter_id: LetterId,
    sender_id: UserId,
    content: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Comment {
    /// Create a comment on a letter.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank
    /// - `TooLong` if content exceeds 5000 characters
    pub fn create(
        letter_id: LetterId,
        sender_id: UserId,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        validate_text("content", &content, 1, Some(MAX_COMMENT_LENGTH))?;

        let now = Timestamp::now();
        Ok(Self {
            id: CommentId::new(),
            letter_id,
            sender_id,
            content: content.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a comment from persistence (no validation).
    pub fn reconstitute(
        id: CommentId,
        letter_id: LetterId,
        sender_id: UserId,
        content: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            letter_id,
            sender_id,
            content,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn letter_id(&self) -> &LetterId {
        &self.letter_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_author(&self, user_id: &UserId) -> bool {
        &self.sender_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> UserId {
        UserId::new("bob").unwrap()
    }

    #[test]
    fn single_character_comment_is_valid() {
        let comment = Comment::create(LetterId::new(), bob(), " ! ").unwrap();
        assert_eq!(comment.content(), "!");
    }

    #[test]
    fn empty_comment_is_rejected() {
        assert_eq!(
            Comment::create(LetterId::new(), bob(), "   "),
            Err(ValidationError::empty_field("content"))
        );
    }

    #[test]
    fn comment_limit_is_inclusive() {
        assert!(Comment::create(LetterId::new(), bob(), "a".repeat(MAX_COMMENT_LENGTH)).is_ok());
        assert_eq!(
            Comment::create(LetterId::new(), bob(), "a".repeat(MAX_COMMENT_LENGTH + 1)),
            Err(ValidationError::too_long(
                "content",
                MAX_COMMENT_LENGTH,
                MAX_COMMENT_LENGTH + 1
            ))
        );
    }

    #[test]
    fn is_author_matches_sender() {
        let comment = Comment::create(LetterId::new(), bob(), "Merci !").unwrap();
        assert!(comment.is_author(&bob()));
        assert!(!comment.is_author(&UserId::new("carol").unwrap()));
    }
}
