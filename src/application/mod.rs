//! Application layer - use cases over the Colli domain.
//!
//! Handlers load aggregates through ports, apply actor-level permission
//! checks the aggregates do not own, persist, then publish events.

mod authorization;
pub mod errors;
pub mod handlers;
mod publishing;
mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{Entity, UseCaseError};
pub use services::{ColliServices, ServicePorts};

pub use handlers::colli::{
    AcceptMemberCommand, AcceptMemberHandler, ApproveColliCommand, ApproveColliHandler,
    ColliFilter, ColliPage, ColliStats, CompleteColliCommand, CompleteColliHandler,
    CreateColliCommand, CreateColliHandler, DeleteColliCommand, DeleteColliHandler,
    GetColliHandler, GetColliQuery, GetColliStatsHandler, JoinColliCommand, JoinColliHandler,
    ListCollisHandler, ListCollisQuery, ListMembersHandler, ListMembersQuery, MemberList,
    PromoteMemberCommand, PromoteMemberHandler, PromoteMemberResult, RejectColliCommand,
    RejectColliHandler, RejectMemberCommand, RejectMemberHandler, RemoveMemberCommand,
    RemoveMemberHandler,
};
pub use handlers::comment::{
    CreateCommentCommand, CreateCommentHandler, DeleteCommentCommand, DeleteCommentHandler,
    ListCommentsHandler, ListCommentsQuery,
};
pub use handlers::letter::{
    CreateLetterCommand, CreateLetterHandler, DeleteLetterCommand, DeleteLetterHandler,
    LetterBody, ListLettersHandler, ListLettersQuery,
};
