//! Colli approval status and per-user membership status state machines.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval lifecycle of a Colli.
///
/// ```text
/// PENDING --approve--> ACTIVE --complete--> COMPLETED
/// PENDING --reject---> REJECTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColliStatus {
    /// Awaiting review. No members, no content.
    Pending,

    /// Approved and open to members and letters.
    Active,

    /// Refused at review. Terminal.
    Rejected,

    /// Correspondence finished. Terminal.
    Completed,
}

impl ColliStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ColliStatus; 4] = [
        ColliStatus::Pending,
        ColliStatus::Active,
        ColliStatus::Rejected,
        ColliStatus::Completed,
    ];

    /// Returns the storage/wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColliStatus::Pending => "PENDING",
            ColliStatus::Active => "ACTIVE",
            ColliStatus::Rejected => "REJECTED",
            ColliStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ColliStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for ColliStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ColliStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Rejected) | (Active, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ColliStatus::*;
        match self {
            Pending => vec![Active, Rejected],
            Active => vec![Completed],
            Rejected | Completed => vec![],
        }
    }
}

/// Status of one user's membership within one Colli.
///
/// ```text
/// PENDING --accept--> ACCEPTED
/// PENDING --reject--> REJECTED
/// ```
///
/// There is no way back to PENDING; the membership must be removed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MembershipStatus {
    /// Returns the storage/wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Pending => "PENDING",
            MembershipStatus::Accepted => "ACCEPTED",
            MembershipStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for MembershipStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MembershipStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MembershipStatus::*;
        match self {
            Pending => vec![Accepted, Rejected],
            Accepted | Rejected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_colli_can_be_approved_or_rejected() {
        assert!(ColliStatus::Pending.can_transition_to(&ColliStatus::Active));
        assert!(ColliStatus::Pending.can_transition_to(&ColliStatus::Rejected));
        assert!(!ColliStatus::Pending.can_transition_to(&ColliStatus::Completed));
    }

    #[test]
    fn active_colli_can_only_complete() {
        assert_eq!(ColliStatus::Active.valid_transitions(), vec![ColliStatus::Completed]);
        assert!(!ColliStatus::Active.can_transition_to(&ColliStatus::Pending));
    }

    #[test]
    fn rejected_and_completed_are_terminal() {
        assert!(ColliStatus::Rejected.is_terminal());
        assert!(ColliStatus::Completed.is_terminal());
        assert!(!ColliStatus::Pending.is_terminal());
    }

    #[test]
    fn colli_transitions_are_consistent() {
        for from in ColliStatus::ALL {
            for to in ColliStatus::ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn membership_leaves_pending_exactly_once() {
        let accepted = MembershipStatus::Pending
            .transition_to(MembershipStatus::Accepted)
            .unwrap();
        assert!(accepted.is_terminal());
        assert!(accepted.transition_to(MembershipStatus::Pending).is_err());
        assert!(MembershipStatus::Rejected
            .transition_to(MembershipStatus::Accepted)
            .is_err());
    }

    #[test]
    fn statuses_serialize_in_screaming_case() {
        assert_eq!(serde_json::to_string(&ColliStatus::Active).unwrap(), "\"ACTIVE\"");
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Accepted).unwrap(),
            "\"ACCEPTED\""
        );
    }
}
