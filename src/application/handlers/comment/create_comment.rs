//! CreateCommentHandler - Command handler for replying to a letter.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_writer;
use crate::application::handlers::{load_colli, load_letter};
use crate::application::publishing::publish_events;
use crate::application::UseCaseError;
use crate::domain::comment::{Comment, CommentAdded};
use crate::domain::foundation::{CommandMetadata, LetterId, SerializableDomainEvent};
use crate::ports::{ColliRepository, CommentRepository, EventPublisher, LetterRepository};

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub letter_id: LetterId,
    pub content: String,
}

/// Handler for commenting. The letter's Colli must be ACTIVE and the
/// sender an ACCEPTED member.
pub struct CreateCommentHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
    comments: Arc<dyn CommentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateCommentHandler {
    pub fn new(
        collis: Arc<dyn ColliRepository>,
        letters: Arc<dyn LetterRepository>,
        comments: Arc<dyn CommentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            collis,
            letters,
            comments,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCommentCommand,
        metadata: CommandMetadata,
    ) -> Result<Comment, UseCaseError> {
        let sender = metadata.actor();
        let letter = load_letter(self.letters.as_ref(), &cmd.letter_id).await?;
        let colli = load_colli(self.collis.as_ref(), letter.colli_id()).await?;
        require_writer(&colli, sender, "comment on letters")?;

        let comment = Comment::create(cmd.letter_id, sender.clone(), cmd.content)?;
        let saved = self.comments.save(&comment).await?;
        publish_events(
            self.event_publisher.as_ref(),
            &metadata,
            [CommentAdded::new(&saved, *colli.id()).to_envelope()],
        )
        .await;

        info!(
            colli_id = %colli.id(),
            user_id = %sender,
            letter_id = %cmd.letter_id,
            comment_id = %saved.id(),
            "Comment added"
        );
        Ok(saved)
    }
}
