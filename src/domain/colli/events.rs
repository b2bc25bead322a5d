//! Colli domain events.
//!
//! - `ColliApproved` - Colli left review and is now active
//! - `ColliRejected` - Colli was refused at review
//! - `MemberAdded` - A user asked to join (membership is PENDING)
//! - `MemberRemoved` - A membership record was deleted
//!
//! Fields are private and every event has a single constructor taking all
//! of its data, so a half-built event cannot exist.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ColliId, DomainError, DomainEvent, EventEnvelope, EventId,
    SerializableDomainEvent, Timestamp, UserId,
};

use super::MemberRole;

// ════════════════════════════════════════════════════════════════════════════
// ColliApproved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a pending Colli is approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliApproved {
    event_id: EventId,
    colli_id: ColliId,
    creator_id: UserId,
    approved_by: Option<UserId>,
    occurred_at: Timestamp,
}

impl ColliApproved {
    pub fn new(colli_id: ColliId, creator_id: UserId, approved_by: Option<UserId>) -> Self {
        Self {
            event_id: EventId::new(),
            colli_id,
            creator_id,
            approved_by,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn creator_id(&self) -> &UserId {
        &self.creator_id
    }

    pub fn approved_by(&self) -> Option<&UserId> {
        self.approved_by.as_ref()
    }
}

domain_event!(
    ColliApproved,
    event_type = "colli.approved.v1",
    schema_version = 1,
    aggregate_id = colli_id,
    aggregate_type = "Colli",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ColliRejected
// ════════════════════════════════════════════════════════════════════════════

/// Published when a pending Colli is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliRejected {
    event_id: EventId,
    colli_id: ColliId,
    reason: Option<String>,
    rejected_by: Option<UserId>,
    occurred_at: Timestamp,
}

impl ColliRejected {
    pub fn new(colli_id: ColliId, reason: Option<String>, rejected_by: Option<UserId>) -> Self {
        Self {
            event_id: EventId::new(),
            colli_id,
            reason,
            rejected_by,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn rejected_by(&self) -> Option<&UserId> {
        self.rejected_by.as_ref()
    }
}

domain_event!(
    ColliRejected,
    event_type = "colli.rejected.v1",
    schema_version = 1,
    aggregate_id = colli_id,
    aggregate_type = "Colli",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberAdded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a user's join request is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAdded {
    event_id: EventId,
    colli_id: ColliId,
    user_id: UserId,
    role: MemberRole,
    occurred_at: Timestamp,
}

impl MemberAdded {
    pub fn new(colli_id: ColliId, user_id: UserId, role: MemberRole) -> Self {
        Self {
            event_id: EventId::new(),
            colli_id,
            user_id,
            role,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }
}

domain_event!(
    MemberAdded,
    event_type = "colli.member_added.v1",
    schema_version = 1,
    aggregate_id = colli_id,
    aggregate_type = "Colli",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberRemoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a membership record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRemoved {
    event_id: EventId,
    colli_id: ColliId,
    user_id: UserId,
    occurred_at: Timestamp,
}

impl MemberRemoved {
    pub fn new(colli_id: ColliId, user_id: UserId) -> Self {
        Self {
            event_id: EventId::new(),
            colli_id,
            user_id,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

domain_event!(
    MemberRemoved,
    event_type = "colli.member_removed.v1",
    schema_version = 1,
    aggregate_id = colli_id,
    aggregate_type = "Colli",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ColliEvent
// ════════════════════════════════════════════════════════════════════════════

/// Every event the Colli aggregate can emit, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColliEvent {
    Approved(ColliApproved),
    Rejected(ColliRejected),
    MemberAdded(MemberAdded),
    MemberRemoved(MemberRemoved),
}

impl ColliEvent {
    /// Returns the routing type of the wrapped event.
    pub fn event_type(&self) -> &'static str {
        match self {
            ColliEvent::Approved(e) => e.event_type(),
            ColliEvent::Rejected(e) => e.event_type(),
            ColliEvent::MemberAdded(e) => e.event_type(),
            ColliEvent::MemberRemoved(e) => e.event_type(),
        }
    }

    /// Returns the Colli that emitted the event.
    pub fn colli_id(&self) -> &ColliId {
        match self {
            ColliEvent::Approved(e) => e.colli_id(),
            ColliEvent::Rejected(e) => e.colli_id(),
            ColliEvent::MemberAdded(e) => e.colli_id(),
            ColliEvent::MemberRemoved(e) => e.colli_id(),
        }
    }

    /// Wraps the inner event for the publisher port.
    pub fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        match self {
            ColliEvent::Approved(e) => e.to_envelope(),
            ColliEvent::Rejected(e) => e.to_envelope(),
            ColliEvent::MemberAdded(e) => e.to_envelope(),
            ColliEvent::MemberRemoved(e) => e.to_envelope(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn approved_envelope_carries_colli_identity() {
        let colli_id = ColliId::new();
        let event = ColliApproved::new(colli_id, alice(), None);

        let envelope = event.to_envelope().unwrap();

        assert_eq!(envelope.event_type, "colli.approved.v1");
        assert_eq!(envelope.aggregate_type, "Colli");
        assert_eq!(envelope.aggregate_id, colli_id.to_string());
        assert_eq!(envelope.payload["creator_id"], "alice");
        assert!(envelope.payload["approved_by"].is_null());
    }

    #[test]
    fn rejected_payload_keeps_reason() {
        let event = ColliRejected::new(ColliId::new(), Some("off topic".to_string()), None);
        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.payload["reason"], "off topic");
        let restored: ColliRejected = envelope.payload_as().unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn member_added_payload_uses_role_name() {
        let event = MemberAdded::new(ColliId::new(), alice(), MemberRole::Member);
        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.event_type, "colli.member_added.v1");
        assert_eq!(envelope.payload["role"], "MEMBER");
    }

    #[test]
    fn colli_event_delegates_to_variant() {
        let colli_id = ColliId::new();
        let event = ColliEvent::MemberRemoved(MemberRemoved::new(colli_id, alice()));
        assert_eq!(event.event_type(), "colli.member_removed.v1");
        assert_eq!(event.colli_id(), &colli_id);
        assert_eq!(event.to_envelope().unwrap().aggregate_id, colli_id.to_string());
    }
}
