//! Colli domain module.
//!
//! The collaboration aggregate: a community, its approval lifecycle and
//! the memberships that decide who may write inside it.
//!
//! # Module Structure
//!
//! - `aggregate` - Colli aggregate root
//! - `membership` - Membership entity owned by the aggregate
//! - `role` - MemberRole hierarchy
//! - `status` - ColliStatus and MembershipStatus state machines
//! - `events` - Domain events emitted by the aggregate
//! - `errors` - Validation and state-conflict errors

mod aggregate;
mod errors;
mod events;
mod membership;
mod role;
mod status;

pub use aggregate::{
    Colli, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_THEME_LENGTH, MIN_NAME_LENGTH,
    MIN_THEME_LENGTH,
};
pub use errors::ColliError;
pub use events::{ColliApproved, ColliEvent, ColliRejected, MemberAdded, MemberRemoved};
pub use membership::Membership;
pub use role::MemberRole;
pub use status::{ColliStatus, MembershipStatus};
