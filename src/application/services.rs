//! Composition root for the use cases.
//!
//! Every handler receives its ports through its constructor; this type
//! only wires one set of ports into all of them.

use std::sync::Arc;

use crate::config::PaginationConfig;
use crate::ports::{
    ColliRepository, CommentRepository, EventPublisher, LetterRepository, UserRepository,
};

use super::handlers::colli::{
    AcceptMemberHandler, ApproveColliHandler, CompleteColliHandler, CreateColliHandler,
    DeleteColliHandler, GetColliHandler, GetColliStatsHandler, JoinColliHandler,
    ListCollisHandler, ListMembersHandler, PromoteMemberHandler, RejectColliHandler,
    RejectMemberHandler, RemoveMemberHandler,
};
use super::handlers::comment::{CreateCommentHandler, DeleteCommentHandler, ListCommentsHandler};
use super::handlers::letter::{CreateLetterHandler, DeleteLetterHandler, ListLettersHandler};

/// Ports shared by all handlers.
#[derive(Clone)]
pub struct ServicePorts {
    pub collis: Arc<dyn ColliRepository>,
    pub letters: Arc<dyn LetterRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
}

/// Every use case, ready to call.
pub struct ColliServices {
    pub create_colli: CreateColliHandler,
    pub approve_colli: ApproveColliHandler,
    pub reject_colli: RejectColliHandler,
    pub complete_colli: CompleteColliHandler,
    pub delete_colli: DeleteColliHandler,
    pub join_colli: JoinColliHandler,
    pub accept_member: AcceptMemberHandler,
    pub reject_member: RejectMemberHandler,
    pub promote_member: PromoteMemberHandler,
    pub remove_member: RemoveMemberHandler,
    pub get_colli: GetColliHandler,
    pub list_collis: ListCollisHandler,
    pub colli_stats: GetColliStatsHandler,
    pub list_members: ListMembersHandler,
    pub create_letter: CreateLetterHandler,
    pub delete_letter: DeleteLetterHandler,
    pub list_letters: ListLettersHandler,
    pub create_comment: CreateCommentHandler,
    pub delete_comment: DeleteCommentHandler,
    pub list_comments: ListCommentsHandler,
}

impl ColliServices {
    pub fn new(ports: ServicePorts, pagination: PaginationConfig) -> Self {
        let ServicePorts {
            collis,
            letters,
            comments,
            users,
            event_publisher,
        } = ports;

        Self {
            create_colli: CreateColliHandler::new(collis.clone()),
            approve_colli: ApproveColliHandler::new(
                collis.clone(),
                users.clone(),
                event_publisher.clone(),
            ),
            reject_colli: RejectColliHandler::new(
                collis.clone(),
                users.clone(),
                event_publisher.clone(),
            ),
            complete_colli: CompleteColliHandler::new(collis.clone(), users.clone()),
            delete_colli: DeleteColliHandler::new(collis.clone(), users.clone()),
            join_colli: JoinColliHandler::new(collis.clone(), event_publisher.clone()),
            accept_member: AcceptMemberHandler::new(collis.clone()),
            reject_member: RejectMemberHandler::new(collis.clone()),
            promote_member: PromoteMemberHandler::new(collis.clone()),
            remove_member: RemoveMemberHandler::new(collis.clone(), event_publisher.clone()),
            get_colli: GetColliHandler::new(collis.clone()),
            list_collis: ListCollisHandler::new(collis.clone(), pagination),
            colli_stats: GetColliStatsHandler::new(collis.clone()),
            list_members: ListMembersHandler::new(collis.clone()),
            create_letter: CreateLetterHandler::new(
                collis.clone(),
                letters.clone(),
                event_publisher.clone(),
            ),
            delete_letter: DeleteLetterHandler::new(
                collis.clone(),
                letters.clone(),
                Some(users.clone()),
            ),
            list_letters: ListLettersHandler::new(collis.clone(), letters.clone()),
            create_comment: CreateCommentHandler::new(
                collis.clone(),
                letters.clone(),
                comments.clone(),
                event_publisher,
            ),
            delete_comment: DeleteCommentHandler::new(
                collis.clone(),
                letters.clone(),
                comments.clone(),
                Some(users),
            ),
            list_comments: ListCommentsHandler::new(collis, letters, comments),
        }
    }
}
