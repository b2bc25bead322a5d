//! CreateLetterHandler - Command handler for posting a letter.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_writer;
use crate::application::handlers::load_colli;
use crate::application::publishing::publish_events;
use crate::application::UseCaseError;
use crate::domain::foundation::{ColliId, CommandMetadata, SerializableDomainEvent};
use crate::domain::letter::{Letter, LetterCreated};
use crate::ports::{ColliRepository, EventPublisher, LetterRepository};

/// What the letter carries.
#[derive(Debug, Clone)]
pub enum LetterBody {
    Text {
        content: String,
    },
    /// A file already stored elsewhere, with an optional caption.
    File {
        file_url: String,
        file_name: Option<String>,
        caption: Option<String>,
    },
}

/// Command for the acting user to post a letter in a Colli.
#[derive(Debug, Clone)]
pub struct CreateLetterCommand {
    pub colli_id: ColliId,
    pub body: LetterBody,
}

/// Handler for posting letters. The Colli must be ACTIVE and the sender
/// an ACCEPTED member.
pub struct CreateLetterHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateLetterHandler {
    pub fn new(
        collis: Arc<dyn ColliRepository>,
        letters: Arc<dyn LetterRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            collis,
            letters,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateLetterCommand,
        metadata: CommandMetadata,
    ) -> Result<Letter, UseCaseError> {
        let sender = metadata.actor();
        let colli = load_colli(self.collis.as_ref(), &cmd.colli_id).await?;
        require_writer(&colli, sender, "post letters")?;

        let letter = match cmd.body {
            LetterBody::Text { content } => {
                Letter::create_text(cmd.colli_id, sender.clone(), content)?
            }
            LetterBody::File {
                file_url,
                file_name,
                caption,
            } => Letter::create_file(cmd.colli_id, sender.clone(), file_url, file_name, caption)?,
        };

        let saved = self.letters.save(&letter).await?;
        publish_events(
            self.event_publisher.as_ref(),
            &metadata,
            [LetterCreated::new(&saved).to_envelope()],
        )
        .await;

        info!(
            colli_id = %cmd.colli_id,
            user_id = %sender,
            letter_id = %saved.id(),
            letter_type = %saved.letter_type(),
            "Letter posted"
        );
        Ok(saved)
    }
}
