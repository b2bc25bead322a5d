//! JoinColliHandler - Command handler for requesting membership.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::load_colli;
use crate::application::publishing::publish_colli_events;
use crate::application::UseCaseError;
use crate::domain::colli::{MemberRole, Membership};
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::{ColliRepository, EventPublisher};

/// Command for the acting user to ask to join a Colli.
#[derive(Debug, Clone)]
pub struct JoinColliCommand {
    pub colli_id: ColliId,
}

/// Handler for join requests. The request is PENDING until a manager decides.
pub struct JoinColliHandler {
    repository: Arc<dyn ColliRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl JoinColliHandler {
    pub fn new(
        repository: Arc<dyn ColliRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: JoinColliCommand,
        metadata: CommandMetadata,
    ) -> Result<Membership, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        let membership = colli.add_member(actor.clone(), MemberRole::Member)?;

        self.repository.save(&colli).await?;
        publish_colli_events(
            self.event_publisher.as_ref(),
            &metadata,
            colli.collect_events(),
        )
        .await;

        info!(colli_id = %cmd.colli_id, user_id = %actor, "Membership requested");
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{as_user, user, FailingEventPublisher, Fixture};
    use crate::domain::colli::{ColliError, MembershipStatus};
    use crate::domain::foundation::ErrorCode;

    fn handler(fx: &Fixture) -> JoinColliHandler {
        JoinColliHandler::new(fx.collis.clone(), fx.bus.clone())
    }

    #[tokio::test]
    async fn join_creates_pending_member_request() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let membership = handler(&fx)
            .handle(JoinColliCommand { colli_id: *colli.id() }, as_user("dave"))
            .await
            .unwrap();

        assert_eq!(membership.status(), MembershipStatus::Pending);
        assert_eq!(membership.role(), MemberRole::Member);
        let reloaded = fx.reload(&colli).await;
        assert!(reloaded.is_pending_member(&user("dave")));
        assert!(!reloaded.is_member(&user("dave")));

        let events = fx.bus.events_of_type("colli.member_added.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload["user_id"], "dave");
        assert_eq!(events[0].payload["role"], "MEMBER");
    }

    #[tokio::test]
    async fn duplicate_request_is_rejected() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let err = handler(&fx)
            .handle(JoinColliCommand { colli_id: *colli.id() }, as_user("carol"))
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Colli(ColliError::UserAlreadyMember(_))));
        assert_eq!(err.code(), ErrorCode::UserAlreadyMember);
    }

    #[tokio::test]
    async fn pending_colli_cannot_be_joined() {
        let fx = Fixture::new();
        let colli = fx.pending_colli().await;

        let err = handler(&fx)
            .handle(JoinColliCommand { colli_id: *colli.id() }, as_user("dave"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InactiveColli);
    }

    #[tokio::test]
    async fn publish_failure_keeps_membership() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let handler = JoinColliHandler::new(fx.collis.clone(), Arc::new(FailingEventPublisher));

        handler
            .handle(JoinColliCommand { colli_id: *colli.id() }, as_user("dave"))
            .await
            .unwrap();

        assert!(fx.reload(&colli).await.is_pending_member(&user("dave")));
    }
}
