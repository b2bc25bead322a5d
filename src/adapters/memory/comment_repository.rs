//! In-memory Comment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::comment::Comment;
use crate::domain::foundation::{CommentId, DomainError, LetterId};
use crate::ports::CommentRepository;

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<HashMap<CommentId, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn save(&self, comment: &Comment) -> Result<Comment, DomainError> {
        self.comments
            .write()
            .await
            .insert(*comment.id(), comment.clone());
        Ok(comment.clone())
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, DomainError> {
        Ok(self.comments.read().await.get(id).cloned())
    }

    async fn find_by_letter(&self, letter_id: &LetterId) -> Result<Vec<Comment>, DomainError> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.letter_id() == letter_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| *c.created_at());
        Ok(comments)
    }

    async fn delete(&self, comment: &Comment) -> Result<bool, DomainError> {
        Ok(self.comments.write().await.remove(comment.id()).is_some())
    }
}
