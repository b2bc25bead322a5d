//! Event publication after a successful save.
//!
//! Publication runs strictly after persistence and can never undo it:
//! failures are logged and swallowed.

use tracing::{debug, warn};

use crate::domain::colli::ColliEvent;
use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Stamp envelopes with the command context and publish them in order.
///
/// Returns `true` when every event reached the publisher.
pub(crate) async fn publish_events<I>(
    publisher: &dyn EventPublisher,
    metadata: &CommandMetadata,
    events: I,
) -> bool
where
    I: IntoIterator<Item = Result<EventEnvelope, DomainError>>,
{
    let correlation_id = metadata.correlation_id();
    let envelopes = match events
        .into_iter()
        .map(|event| event.map(|e| metadata.stamp(e, &correlation_id)))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(envelopes) => envelopes,
        Err(err) => {
            warn!(error = %err, %correlation_id, "Failed to build event envelopes");
            return false;
        }
    };

    if envelopes.is_empty() {
        return true;
    }

    let count = envelopes.len();
    match publisher.publish_all(envelopes).await {
        Ok(()) => {
            debug!(count, %correlation_id, "Published domain events");
            true
        }
        Err(err) => {
            warn!(
                error = %err,
                count,
                %correlation_id,
                "Event publication failed; persisted state is kept"
            );
            false
        }
    }
}

/// Publish drained Colli events, preserving emission order.
pub(crate) async fn publish_colli_events(
    publisher: &dyn EventPublisher,
    metadata: &CommandMetadata,
    events: Vec<ColliEvent>,
) -> bool {
    publish_events(publisher, metadata, events.iter().map(ColliEvent::to_envelope)).await
}
