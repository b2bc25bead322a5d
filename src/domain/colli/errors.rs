//! Colli aggregate errors.
//!
//! These cover construction validation and state conflicts only. The
//! aggregate never decides *who* may act; actor permissions are checked
//! by the application layer.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, UserId, ValidationError};

use super::{ColliStatus, MembershipStatus};

/// Errors raised by `Colli` and its memberships.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColliError {
    /// Name, theme or description failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `approve` was called on a Colli that is not PENDING.
    #[error("Cannot approve colli: status is {current}, expected PENDING")]
    AlreadyActive { current: ColliStatus },

    /// A membership change was attempted on a Colli that is not ACTIVE.
    #[error("Cannot {attempted}: colli is {current}, expected ACTIVE")]
    Inactive {
        current: ColliStatus,
        attempted: &'static str,
    },

    /// The user already holds a membership record in any status.
    #[error("User {0} already has a membership in this colli")]
    UserAlreadyMember(UserId),

    /// The user holds no membership record in the required status.
    #[error("User {0} is not a member of this colli")]
    UserNotMember(UserId),

    /// Membership exists but is not PENDING.
    #[error("Cannot {attempted} membership of {user_id}: status is {current}, expected PENDING")]
    MembershipNotPending {
        user_id: UserId,
        current: MembershipStatus,
        attempted: &'static str,
    },

    /// Any other lifecycle transition the current status forbids.
    #[error("Cannot {attempted} colli: status is {current}")]
    InvalidTransition {
        current: ColliStatus,
        attempted: &'static str,
    },
}

impl ColliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ColliError::Validation(_) => ErrorCode::ValidationFailed,
            ColliError::AlreadyActive { .. } => ErrorCode::ColliAlreadyActive,
            ColliError::Inactive { .. } => ErrorCode::InactiveColli,
            ColliError::UserAlreadyMember(_) => ErrorCode::UserAlreadyMember,
            ColliError::UserNotMember(_) => ErrorCode::UserNotMember,
            ColliError::MembershipNotPending { .. } | ColliError::InvalidTransition { .. } => {
                ErrorCode::InvalidStateTransition
            }
        }
    }
}
