//! Membership entity - one user's role and status within one Colli.
//!
//! Memberships are owned by the `Colli` aggregate. Their mutators are
//! visible only to the `colli` module, so every status or role change goes
//! through an aggregate method that checks the surrounding invariants.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ColliId, MembershipId, StateMachine, Timestamp, UserId};

use super::{ColliError, MemberRole, MembershipStatus};

/// A user's membership in a Colli.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    id: MembershipId,
    user_id: UserId,
    colli_id: ColliId,
    role: MemberRole,
    status: MembershipStatus,
    joined_at: Timestamp,
}

impl Membership {
    /// A fresh join request awaiting a manager's decision.
    pub(super) fn pending(colli_id: ColliId, user_id: UserId, role: MemberRole) -> Self {
        Self {
            id: MembershipId::new(),
            user_id,
            colli_id,
            role,
            status: MembershipStatus::Pending,
            joined_at: Timestamp::now(),
        }
    }

    /// The creator's membership granted on approval.
    pub(super) fn founding_manager(colli_id: ColliId, user_id: UserId) -> Self {
        Self {
            id: MembershipId::new(),
            user_id,
            colli_id,
            role: MemberRole::Manager,
            status: MembershipStatus::Accepted,
            joined_at: Timestamp::now(),
        }
    }

    /// Reconstitute a membership from persistence (no validation).
    pub fn reconstitute(
        id: MembershipId,
        user_id: UserId,
        colli_id: ColliId,
        role: MemberRole,
        status: MembershipStatus,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            colli_id,
            role,
            status,
            joined_at,
        }
    }

    pub fn id(&self) -> &MembershipId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn colli_id(&self) -> &ColliId {
        &self.colli_id
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }

    pub fn status(&self) -> MembershipStatus {
        self.status
    }

    pub fn joined_at(&self) -> &Timestamp {
        &self.joined_at
    }

    pub fn is_accepted(&self) -> bool {
        self.status == MembershipStatus::Accepted
    }

    pub fn is_pending(&self) -> bool {
        self.status == MembershipStatus::Pending
    }

    /// Managers and moderators may moderate content.
    pub fn can_moderate(&self) -> bool {
        matches!(self.role, MemberRole::Manager | MemberRole::Moderator)
    }

    /// Only managers may accept, reject or promote members.
    pub fn can_manage_members(&self) -> bool {
        self.role == MemberRole::Manager
    }

    pub(super) fn accept(&mut self) -> Result<(), ColliError> {
        self.transition(MembershipStatus::Accepted, "accept")
    }

    pub(super) fn reject(&mut self) -> Result<(), ColliError> {
        self.transition(MembershipStatus::Rejected, "reject")
    }

    /// Changes the role, returning the previous one.
    pub(super) fn promote_to(&mut self, role: MemberRole) -> MemberRole {
        std::mem::replace(&mut self.role, role)
    }

    fn transition(
        &mut self,
        target: MembershipStatus,
        action: &'static str,
    ) -> Result<(), ColliError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| ColliError::MembershipNotPending {
                user_id: self.user_id.clone(),
                current: e.from,
                attempted: action,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(role: MemberRole) -> Membership {
        Membership::pending(ColliId::new(), UserId::new("alice").unwrap(), role)
    }

    #[test]
    fn new_membership_is_pending() {
        let m = pending(MemberRole::Member);
        assert!(m.is_pending());
        assert!(!m.is_accepted());
    }

    #[test]
    fn accept_moves_pending_to_accepted() {
        let mut m = pending(MemberRole::Member);
        m.accept().unwrap();
        assert_eq!(m.status(), MembershipStatus::Accepted);
    }

    #[test]
    fn reject_after_accept_fails_and_names_current_status() {
        let mut m = pending(MemberRole::Member);
        m.accept().unwrap();
        match m.reject() {
            Err(ColliError::MembershipNotPending {
                current, attempted, ..
            }) => {
                assert_eq!(current, MembershipStatus::Accepted);
                assert_eq!(attempted, "reject");
            }
            other => panic!("Expected MembershipNotPending, got {:?}", other),
        }
        assert_eq!(m.status(), MembershipStatus::Accepted);
    }

    #[test]
    fn moderation_rights_follow_role() {
        assert!(pending(MemberRole::Manager).can_moderate());
        assert!(pending(MemberRole::Moderator).can_moderate());
        assert!(!pending(MemberRole::Patron).can_moderate());
        assert!(!pending(MemberRole::Member).can_moderate());
    }

    #[test]
    fn only_managers_manage_members() {
        assert!(pending(MemberRole::Manager).can_manage_members());
        assert!(!pending(MemberRole::Moderator).can_manage_members());
    }

    #[test]
    fn promote_returns_previous_role() {
        let mut m = pending(MemberRole::Member);
        assert_eq!(m.promote_to(MemberRole::Patron), MemberRole::Member);
        assert_eq!(m.role(), MemberRole::Patron);
    }

    #[test]
    fn founding_manager_is_accepted_manager() {
        let m = Membership::founding_manager(ColliId::new(), UserId::new("creator").unwrap());
        assert!(m.is_accepted());
        assert!(m.can_manage_members());
    }
}
