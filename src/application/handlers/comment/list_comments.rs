//! ListCommentsHandler - Query handler for the comments on a letter.

use std::sync::Arc;
use tracing::debug;

use crate::application::authorization::require_reader;
use crate::application::handlers::{load_colli, load_letter};
use crate::application::UseCaseError;
use crate::domain::comment::Comment;
use crate::domain::foundation::{CommandMetadata, LetterId};
use crate::ports::{ColliRepository, CommentRepository, LetterRepository};

#[derive(Debug, Clone)]
pub struct ListCommentsQuery {
    pub letter_id: LetterId,
}

/// Handler for reading comments; the letter's Colli decides access.
pub struct ListCommentsHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl ListCommentsHandler {
    pub fn new(
        collis: Arc<dyn ColliRepository>,
        letters: Arc<dyn LetterRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            collis,
            letters,
            comments,
        }
    }

    pub async fn handle(
        &self,
        query: ListCommentsQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<Comment>, UseCaseError> {
        let letter = load_letter(self.letters.as_ref(), &query.letter_id).await?;
        let colli = load_colli(self.collis.as_ref(), letter.colli_id()).await?;
        require_reader(&colli, metadata.actor(), "read comments")?;

        let comments = self.comments.find_by_letter(&query.letter_id).await?;
        debug!(letter_id = %query.letter_id, count = comments.len(), "Listed comments");
        Ok(comments)
    }
}
