//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors, and event infrastructure
//! that form the vocabulary of the Colli domain.

mod command;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub(crate) use errors::validate_text;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ColliId, CommentId, LetterId, MembershipId, UserId};
pub use state_machine::{InvalidTransition, StateMachine};
pub use timestamp::Timestamp;
