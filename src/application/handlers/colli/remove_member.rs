//! RemoveMemberHandler - Command handler for leaving or expelling.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_member_manager;
use crate::application::handlers::load_colli;
use crate::application::publishing::publish_colli_events;
use crate::application::UseCaseError;
use crate::domain::colli::Membership;
use crate::domain::foundation::{ColliId, CommandMetadata, UserId};
use crate::ports::{ColliRepository, EventPublisher};

/// Command to delete a user's membership record, whatever its status.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub colli_id: ColliId,
    pub user_id: UserId,
}

/// Handler for removing members.
///
/// A user may always remove themselves; removing someone else takes an
/// accepted manager. Removing the last manager is allowed.
pub struct RemoveMemberHandler {
    repository: Arc<dyn ColliRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RemoveMemberHandler {
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
        cmd: RemoveMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<Membership, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        if actor != &cmd.user_id {
            require_member_manager(&colli, actor, "remove other members")?;
        }

        let removed = colli.remove_member(&cmd.user_id)?;
        self.repository.save(&colli).await?;
        publish_colli_events(
            self.event_publisher.as_ref(),
            &metadata,
            colli.collect_events(),
        )
        .await;

        info!(
            colli_id = %cmd.colli_id,
            user_id = %actor,
            member_id = %cmd.user_id,
            "Member removed"
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{as_user, user, Fixture};
    use crate::domain::colli::{Colli, MembershipStatus};
    use crate::domain::foundation::ErrorCode;

    fn remove(colli: &Colli, member: &str) -> RemoveMemberCommand {
        RemoveMemberCommand {
            colli_id: *colli.id(),
            user_id: user(member),
        }
    }

    fn handler(fx: &Fixture) -> RemoveMemberHandler {
        RemoveMemberHandler::new(fx.collis.clone(), fx.bus.clone())
    }

    #[tokio::test]
    async fn member_can_leave() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let removed = handler(&fx)
            .handle(remove(&colli, "bob"), as_user("bob"))
            .await
            .unwrap();

        assert_eq!(removed.status(), MembershipStatus::Accepted);
        assert!(!fx.reload(&colli).await.has_membership(&user("bob")));
        let events = fx.bus.events_of_type("colli.member_removed.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload["user_id"], "bob");
    }

    #[tokio::test]
    async fn manager_can_remove_pending_request() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let removed = handler(&fx)
            .handle(remove(&colli, "carol"), as_user("alice"))
            .await
            .unwrap();

        assert_eq!(removed.status(), MembershipStatus::Pending);
        assert!(!fx.reload(&colli).await.has_membership(&user("carol")));
    }

    #[tokio::test]
    async fn member_cannot_remove_someone_else() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let err = handler(&fx)
            .handle(remove(&colli, "alice"), as_user("bob"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(fx.reload(&colli).await.is_manager(&user("alice")));
    }

    #[tokio::test]
    async fn last_manager_may_leave() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        handler(&fx)
            .handle(remove(&colli, "alice"), as_user("alice"))
            .await
            .unwrap();

        let reloaded = fx.reload(&colli).await;
        assert!(reloaded.accepted_members().iter().all(|m| !m.can_manage_members()));
    }

    #[tokio::test]
    async fn removing_non_member_fails() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let err = handler(&fx)
            .handle(remove(&colli, "dave"), as_user("dave"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserNotMember);
        assert_eq!(fx.bus.event_count(), 0);
    }
}
