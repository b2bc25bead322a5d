//! Letter domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, ColliId, EventId, LetterId, Timestamp, UserId};

use super::{Letter, LetterType};

/// Published when a letter is posted in a Colli.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCreated {
    event_id: EventId,
    letter_id: LetterId,
    colli_id: ColliId,
    sender_id: UserId,
    letter_type: LetterType,
    occurred_at: Timestamp,
}

impl LetterCreated {
    pub fn new(letter: &Letter) -> Self {
        Self {
            event_id: EventId::new(),
            letter_id: *letter.id(),
            colli_id: *letter.colli_id(),
            sender_id: letter.sender_id().clone(),
            letter_type: letter.letter_type(),
            occurred_at: *letter.created_at(),
        }
    }

    pub fn letter_id(&self) -> &LetterId {
        &self.letter_id
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }
}

domain_event!(
    LetterCreated,
    event_type = "letter.created.v1",
    schema_version = 1,
    aggregate_id = letter_id,
    aggregate_type = "Letter",
    occurred_at = occurred_at,
    event_id = event_id
);
