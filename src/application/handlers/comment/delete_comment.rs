//! DeleteCommentHandler - Command handler for removing a comment.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::authorization::can_delete_content;
use crate::application::errors::Entity;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::comment::Comment;
use crate::domain::foundation::{CommandMetadata, CommentId, DomainError};
use crate::ports::{ColliRepository, CommentRepository, LetterRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub comment_id: CommentId,
}

/// Handler for deleting comments.
///
/// Same rule as letters: author, manager of the Colli the letter belongs
/// to, or admin when a user repository is wired.
pub struct DeleteCommentHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Option<Arc<dyn UserRepository>>,
}

impl DeleteCommentHandler {
    pub fn new(
        collis: Arc<dyn ColliRepository>,
        letters: Arc<dyn LetterRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Option<Arc<dyn UserRepository>>,
    ) -> Self {
        Self {
            collis,
            letters,
            comments,
            users,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteCommentCommand,
        metadata: CommandMetadata,
    ) -> Result<(), UseCaseError> {
        let actor = metadata.actor();
        let comment = self
            .comments
            .find_by_id(&cmd.comment_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(Entity::Comment, cmd.comment_id))?;
        let colli = self.owning_colli(&comment).await?;

        let allowed = can_delete_content(
            comment.is_author(actor),
            colli.as_ref(),
            self.users.as_deref(),
            actor,
        )
        .await?;
        if !allowed {
            warn!(comment_id = %cmd.comment_id, user_id = %actor, "Denied: comment deletion");
            return Err(UseCaseError::forbidden(
                "only the author, a colli manager or an administrator can delete this comment",
            ));
        }

        if !self.comments.delete(&comment).await? {
            return Err(UseCaseError::not_found(Entity::Comment, cmd.comment_id));
        }

        info!(
            user_id = %actor,
            letter_id = %comment.letter_id(),
            comment_id = %cmd.comment_id,
            "Comment deleted"
        );
        Ok(())
    }

    /// The Colli of the commented letter, if both still exist.
    async fn owning_colli(&self, comment: &Comment) -> Result<Option<Colli>, DomainError> {
        match self.letters.find_by_id(comment.letter_id()).await? {
            Some(letter) => self.collis.find_by_id(letter.colli_id()).await,
            None => Ok(None),
        }
    }
}
