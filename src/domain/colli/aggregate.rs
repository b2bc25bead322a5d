//! Colli aggregate root.
//!
//! A Colli is a community in which members exchange letters. It owns its
//! membership list and is the only place memberships change, so the
//! one-membership-per-user rule lives here and not in storage.
//!
//! # Lifecycle
//!
//! ```text
//! PENDING --approve--> ACTIVE --complete--> COMPLETED
//! PENDING --reject---> REJECTED
//! ```
//!
//! Every other transition fails with an error naming the current status
//! and the attempted action.
//!
//! # Events
//!
//! Mutations append to a pending event list drained by `collect_events`.
//! Pending events are not part of the persisted state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    validate_text, ColliId, StateMachine, Timestamp, UserId, ValidationError,
};

use super::{
    ColliApproved, ColliError, ColliEvent, ColliRejected, ColliStatus, MemberAdded, MemberRemoved,
    MemberRole, Membership,
};

/// Minimum length of a Colli name, in characters.
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length of a Colli name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum length of a Colli theme, in characters.
pub const MIN_THEME_LENGTH: usize = 2;

/// Maximum length of a Colli theme, in characters.
pub const MAX_THEME_LENGTH: usize = 50;

/// Maximum length of a Colli description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Colli aggregate - a community and its memberships.
///
/// # Invariants
///
/// - `name` is 3-100 characters, `theme` 2-50 characters (trimmed)
/// - at most one `Membership` per user, whatever its status
/// - approval always leaves the creator as an ACCEPTED MANAGER
/// - `member_count` counts ACCEPTED memberships only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colli {
    id: ColliId,
    name: String,
    theme: String,
    description: Option<String>,
    creator_id: UserId,
    status: ColliStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
    members: Vec<Membership>,

    #[serde(skip)]
    pending_events: Vec<ColliEvent>,
}

impl Colli {
    /// Create a new Colli awaiting approval, with no members.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name, theme or description is out of bounds
    pub fn create(
        name: impl Into<String>,
        theme: impl Into<String>,
        creator_id: UserId,
        description: Option<String>,
    ) -> Result<Self, ColliError> {
        let name = name.into();
        let theme = theme.into();
        validate_text("name", &name, MIN_NAME_LENGTH, Some(MAX_NAME_LENGTH))?;
        validate_text("theme", &theme, MIN_THEME_LENGTH, Some(MAX_THEME_LENGTH))?;
        let description = Self::normalize_description(description)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ColliId::new(),
            name: name.trim().to_string(),
            theme: theme.trim().to_string(),
            description,
            creator_id,
            status: ColliStatus::Pending,
            created_at: now,
            updated_at: now,
            members: Vec::new(),
            pending_events: Vec::new(),
        })
    }

    /// Reconstitute a Colli from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ColliId,
        name: String,
        theme: String,
        description: Option<String>,
        creator_id: UserId,
        status: ColliStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
        members: Vec<Membership>,
    ) -> Self {
        Self {
            id,
            name,
            theme,
            description,
            creator_id,
            status,
            created_at,
            updated_at,
            members,
            pending_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ColliId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn creator_id(&self) -> &UserId {
        &self.creator_id
    }

    pub fn status(&self) -> ColliStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.status == ColliStatus::Active
    }

    /// Snapshot of every membership record, in insertion order.
    ///
    /// The returned vector is owned; changing it never touches the aggregate.
    pub fn members(&self) -> Vec<Membership> {
        self.members.clone()
    }

    /// Snapshot of ACCEPTED memberships.
    pub fn accepted_members(&self) -> Vec<Membership> {
        self.members
            .iter()
            .filter(|m| m.is_accepted())
            .cloned()
            .collect()
    }

    /// Snapshot of PENDING memberships.
    pub fn pending_members(&self) -> Vec<Membership> {
        self.members
            .iter()
            .filter(|m| m.is_pending())
            .cloned()
            .collect()
    }

    /// Number of ACCEPTED members.
    pub fn member_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_accepted()).count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Membership queries
    // ─────────────────────────────────────────────────────────────────────────

    /// True only for an ACCEPTED membership.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.accepted(user_id).is_some()
    }

    pub fn is_pending_member(&self, user_id: &UserId) -> bool {
        self.find(user_id).is_some_and(|m| m.is_pending())
    }

    /// True for a membership record in any status.
    pub fn has_membership(&self, user_id: &UserId) -> bool {
        self.find(user_id).is_some()
    }

    /// True for an ACCEPTED membership with the MANAGER role.
    pub fn is_manager(&self, user_id: &UserId) -> bool {
        self.accepted(user_id)
            .is_some_and(|m| m.role() == MemberRole::Manager)
    }

    /// True for an ACCEPTED manager or moderator.
    pub fn can_moderate(&self, user_id: &UserId) -> bool {
        self.accepted(user_id).is_some_and(|m| m.can_moderate())
    }

    /// The ACCEPTED membership of `user_id`, if any.
    pub fn get_member(&self, user_id: &UserId) -> Option<Membership> {
        self.accepted(user_id).cloned()
    }

    /// Role of an ACCEPTED member.
    pub fn member_role(&self, user_id: &UserId) -> Option<MemberRole> {
        self.accepted(user_id).map(|m| m.role())
    }

    /// Writing letters and comments needs an active Colli and an accepted member.
    pub fn can_user_write(&self, user_id: &UserId) -> bool {
        self.is_active() && self.is_member(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Approve a pending Colli and make its creator the manager.
    ///
    /// Not idempotent: any call on a non-PENDING Colli fails.
    ///
    /// # Errors
    ///
    /// - `AlreadyActive` unless status is PENDING
    pub fn approve(&mut self, approved_by: Option<UserId>) -> Result<(), ColliError> {
        if self.status != ColliStatus::Pending {
            return Err(ColliError::AlreadyActive {
                current: self.status,
            });
        }

        self.status = ColliStatus::Active;
        self.install_founding_manager();
        self.touch();
        self.record(ColliEvent::Approved(ColliApproved::new(
            self.id,
            self.creator_id.clone(),
            approved_by,
        )));
        Ok(())
    }

    /// Reject a pending Colli.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless status is PENDING
    pub fn reject(
        &mut self,
        reason: Option<String>,
        rejected_by: Option<UserId>,
    ) -> Result<(), ColliError> {
        self.transition(ColliStatus::Rejected, "reject")?;
        self.record(ColliEvent::Rejected(ColliRejected::new(
            self.id,
            reason,
            rejected_by,
        )));
        Ok(())
    }

    /// Close an active Colli.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless status is ACTIVE
    pub fn complete(&mut self) -> Result<(), ColliError> {
        self.transition(ColliStatus::Completed, "complete")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Membership mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a join request. The new membership is PENDING.
    ///
    /// # Errors
    ///
    /// - `Inactive` unless status is ACTIVE
    /// - `UserAlreadyMember` if the user has a membership in any status
    pub fn add_member(
        &mut self,
        user_id: UserId,
        role: MemberRole,
    ) -> Result<Membership, ColliError> {
        self.ensure_active("add member")?;
        if self.has_membership(&user_id) {
            return Err(ColliError::UserAlreadyMember(user_id));
        }

        let membership = Membership::pending(self.id, user_id.clone(), role);
        self.members.push(membership.clone());
        self.touch();
        self.record(ColliEvent::MemberAdded(MemberAdded::new(
            self.id, user_id, role,
        )));
        Ok(membership)
    }

    /// Accept a PENDING membership.
    ///
    /// # Errors
    ///
    /// - `UserNotMember` if the user has no membership record
    /// - `MembershipNotPending` if the membership was already decided
    pub fn accept_member(&mut self, user_id: &UserId) -> Result<(), ColliError> {
        self.find_mut(user_id)?.accept()?;
        self.touch();
        Ok(())
    }

    /// Reject a PENDING membership. The record stays and keeps blocking re-adds.
    ///
    /// # Errors
    ///
    /// - `UserNotMember` if the user has no membership record
    /// - `MembershipNotPending` if the membership was already decided
    pub fn reject_member(&mut self, user_id: &UserId) -> Result<(), ColliError> {
        self.find_mut(user_id)?.reject()?;
        self.touch();
        Ok(())
    }

    /// Delete a membership record in any status.
    ///
    /// No guard keeps at least one manager: removing the last manager is allowed.
    ///
    /// # Errors
    ///
    /// - `UserNotMember` if the user has no membership record
    pub fn remove_member(&mut self, user_id: &UserId) -> Result<Membership, ColliError> {
        let position = self
            .members
            .iter()
            .position(|m| m.user_id() == user_id)
            .ok_or_else(|| ColliError::UserNotMember(user_id.clone()))?;

        let removed = self.members.remove(position);
        self.touch();
        self.record(ColliEvent::MemberRemoved(MemberRemoved::new(
            self.id,
            user_id.clone(),
        )));
        Ok(removed)
    }

    /// Change the role of an ACCEPTED member, returning the previous role.
    ///
    /// # Errors
    ///
    /// - `UserNotMember` unless the user's membership is ACCEPTED
    pub fn promote_member(
        &mut self,
        user_id: &UserId,
        new_role: MemberRole,
    ) -> Result<MemberRole, ColliError> {
        let membership = self
            .members
            .iter_mut()
            .find(|m| m.user_id() == user_id && m.is_accepted())
            .ok_or_else(|| ColliError::UserNotMember(user_id.clone()))?;

        let previous = membership.promote_to(new_role);
        self.touch();
        Ok(previous)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Drain the events recorded since the last call, in emission order.
    pub fn collect_events(&mut self) -> Vec<ColliEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Events recorded but not yet collected.
    pub fn pending_event_count(&self) -> usize {
        self.pending_events.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn find(&self, user_id: &UserId) -> Option<&Membership> {
        self.members.iter().find(|m| m.user_id() == user_id)
    }

    fn accepted(&self, user_id: &UserId) -> Option<&Membership> {
        self.find(user_id).filter(|m| m.is_accepted())
    }

    fn find_mut(&mut self, user_id: &UserId) -> Result<&mut Membership, ColliError> {
        self.members
            .iter_mut()
            .find(|m| m.user_id() == user_id)
            .ok_or_else(|| ColliError::UserNotMember(user_id.clone()))
    }

    /// Grants the creator MANAGER/ACCEPTED without the duplicate check of
    /// `add_member`. Any earlier record for the creator is replaced so the
    /// one-membership-per-user rule still holds.
    fn install_founding_manager(&mut self) {
        self.members.retain(|m| m.user_id() != &self.creator_id);
        self.members
            .insert(0, Membership::founding_manager(self.id, self.creator_id.clone()));
    }

    fn transition(&mut self, target: ColliStatus, action: &'static str) -> Result<(), ColliError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| ColliError::InvalidTransition {
                current: e.from,
                attempted: action,
            })?;
        self.touch();
        Ok(())
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), ColliError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ColliError::Inactive {
                current: self.status,
                attempted: action,
            })
        }
    }

    fn normalize_description(
        description: Option<String>,
    ) -> Result<Option<String>, ValidationError> {
        match description.map(|d| d.trim().to_string()) {
            Some(d) if d.is_empty() => Ok(None),
            Some(d) => {
                let len = d.chars().count();
                if len > MAX_DESCRIPTION_LENGTH {
                    return Err(ValidationError::too_long(
                        "description",
                        MAX_DESCRIPTION_LENGTH,
                        len,
                    ));
                }
                Ok(Some(d))
            }
            None => Ok(None),
        }
    }

    fn record(&mut self, event: ColliEvent) {
        self.pending_events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
