//! Subscriber side of the event port: downstream reactions to Colli events.
//!
//! Downstream effects of Colli events (notifications, feeds) register
//! here without the use cases knowing about them.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Reacts to one kind of event, e.g. notifying a user they were accepted.
///
/// Implementations should be idempotent and quick; a failing handler
/// must not affect other handlers or already-committed state.
///
/// # Example
///
/// ```ignore
/// struct WelcomeNotifier { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for WelcomeNotifier {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let added: MemberAdded = event.payload_as()?;
///         // Notify the Colli managers...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "WelcomeNotifier"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events by event type.
pub trait EventSubscriber: Send + Sync {
    /// Registers `handler` for envelopes whose `event_type` equals `event_type`.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// A bus that both publishes and accepts subscriptions.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_and_subscriber_are_object_safe() {
        fn _handler(_: &dyn EventHandler) {}
        fn _subscriber(_: &dyn EventSubscriber) {}
        fn _bus(_: &dyn EventBus) {}
    }
}
