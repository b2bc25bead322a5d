//! EventPublisher port - Interface for publishing domain events.
//!
//! Use cases publish only after the aggregate has been saved. A failed
//! publication never rolls back persisted state; callers log and move on.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events of one call are delivered in the order given
/// - Errors are reported, leaving the caller to decide
///
/// # Example
///
/// ```ignore
/// let envelopes = colli
///     .collect_events()
///     .iter()
///     .map(ColliEvent::to_envelope)
///     .collect::<Result<Vec<_>, _>>()?;
/// publisher.publish_all(envelopes).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events, preserving their order.
    ///
    /// Adapters without batch support publish sequentially and stop at
    /// the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
