//! Comment domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ColliId, CommentId, EventId, LetterId, Timestamp, UserId,
};

use super::Comment;

/// Published when a comment is added to a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAdded {
    event_id: EventId,
    comment_id: CommentId,
    letter_id: LetterId,
    colli_id: ColliId,
    sender_id: UserId,
    occurred_at: Timestamp,
}

impl CommentAdded {
    /// `colli_id` is the Colli of the commented letter; comments do not store it.
    pub fn new(comment: &Comment, colli_id: ColliId) -> Self {
        Self {
            event_id: EventId::new(),
            comment_id: *comment.id(),
            letter_id: *comment.letter_id(),
            colli_id,
            sender_id: comment.sender_id().clone(),
            occurred_at: *comment.created_at(),
        }
    }

    pub fn comment_id(&self) -> &CommentId {
        &self.comment_id
    }

    pub fn letter_id(&self) -> &LetterId {
        &self.letter_id
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }
}

domain_event!(
    CommentAdded,
    event_type = "comment.added.v1",
    schema_version = 1,
    aggregate_id = comment_id,
    aggregate_type = "Comment",
    occurred_at = occurred_at,
    event_id = event_id
);
