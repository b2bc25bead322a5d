//! Colli handlers: lifecycle, membership workflow and queries.

mod accept_member;
mod approve_colli;
mod complete_colli;
mod create_colli;
mod delete_colli;
mod get_colli;
mod get_colli_stats;
mod join_colli;
mod list_collis;
mod list_members;
mod promote_member;
mod reject_colli;
mod reject_member;
mod remove_member;

pub use accept_member::{AcceptMemberCommand, AcceptMemberHandler};
pub use approve_colli::{ApproveColliCommand, ApproveColliHandler};
pub use complete_colli::{CompleteColliCommand, CompleteColliHandler};
pub use create_colli::{CreateColliCommand, CreateColliHandler};
pub use delete_colli::{DeleteColliCommand, DeleteColliHandler};
pub use get_colli::{GetColliHandler, GetColliQuery};
pub use get_colli_stats::{ColliStats, GetColliStatsHandler};
pub use join_colli::{JoinColliCommand, JoinColliHandler};
pub use list_collis::{ColliFilter, ColliPage, ListCollisHandler, ListCollisQuery};
pub use list_members::{ListMembersHandler, ListMembersQuery, MemberList};
pub use promote_member::{PromoteMemberCommand, PromoteMemberHandler, PromoteMemberResult};
pub use reject_colli::{RejectColliCommand, RejectColliHandler};
pub use reject_member::{RejectMemberCommand, RejectMemberHandler};
pub use remove_member::{RemoveMemberCommand, RemoveMemberHandler};
