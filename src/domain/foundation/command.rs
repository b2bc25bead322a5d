//! Command infrastructure for use-case handlers.
//!
//! Every command handler receives a `CommandMetadata` naming the acting
//! user. Authorization decisions in the application layer are made
//! against `metadata.user_id`; commands themselves only carry targets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EventEnvelope, UserId};

/// Who is acting, plus request correlation, for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Ties together every event emitted while serving this command.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for the acting user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            trace_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Returns the acting user.
    pub fn actor(&self) -> &UserId {
        &self.user_id
    }

    /// The caller-supplied correlation ID or a fresh UUID.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// The caller-supplied correlation ID, if any.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Stamps an outgoing envelope with the acting user, trace ID and the
    /// given correlation ID.
    ///
    /// Callers stamping a batch resolve `correlation_id()` once so every
    /// envelope of one command shares it.
    pub fn stamp(&self, envelope: EventEnvelope, correlation_id: &str) -> EventEnvelope {
        let envelope = envelope
            .with_correlation_id(correlation_id)
            .with_user_id(self.user_id.as_str());
        match &self.trace_id {
            Some(trace_id) => envelope.with_trace_id(trace_id.clone()),
            None => envelope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn new_has_no_optional_context() {
        let metadata = CommandMetadata::new(alice());
        assert_eq!(metadata.actor(), &alice());
        assert!(metadata.correlation_id_opt().is_none());
        assert!(metadata.trace_id().is_none());
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(alice());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn correlation_id_returns_set_value() {
        let metadata = CommandMetadata::new(alice()).with_correlation_id("req-42");
        assert_eq!(metadata.correlation_id(), "req-42");
    }

    #[test]
    fn stamp_applies_actor_correlation_and_trace() {
        let metadata = CommandMetadata::new(alice()).with_trace_id("trace-1");
        let envelope = EventEnvelope::new("colli.approved.v1", "c-1", "Colli", json!({}));

        let stamped = metadata.stamp(envelope, "req-9");

        assert_eq!(stamped.metadata.correlation_id.as_deref(), Some("req-9"));
        assert_eq!(stamped.metadata.user_id.as_deref(), Some("alice"));
        assert_eq!(stamped.metadata.trace_id.as_deref(), Some("trace-1"));
    }

    #[test]
    fn serialization_round_trip() {
        let metadata = CommandMetadata::new(alice())
            .with_correlation_id("corr")
            .with_trace_id("trace");

        let json = serde_json::to_string(&metadata).unwrap();
        let restored: CommandMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(metadata, restored);
    }
}
