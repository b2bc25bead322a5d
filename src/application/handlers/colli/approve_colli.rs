//! ApproveColliHandler - Command handler for activating a pending Colli.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_admin;
use crate::application::handlers::load_colli;
use crate::application::publishing::publish_colli_events;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::{ColliRepository, EventPublisher, UserRepository};

/// Command to approve a Colli.
#[derive(Debug, Clone)]
pub struct ApproveColliCommand {
    pub colli_id: ColliId,
}

/// Handler for approving Collis. Only platform admins may approve.
///
/// Approval makes the creator the accepted MANAGER and emits
/// `colli.approved.v1`.
pub struct ApproveColliHandler {
    repository: Arc<dyn ColliRepository>,
    users: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ApproveColliHandler {
    pub fn new(
        repository: Arc<dyn ColliRepository>,
        users: Arc<dyn UserRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            users,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ApproveColliCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let actor = metadata.actor();
        require_admin(self.users.as_ref(), actor, "approve collis").await?;

        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        colli.approve(Some(actor.clone()))?;

        let saved = self.repository.save(&colli).await?;
        publish_colli_events(
            self.event_publisher.as_ref(),
            &metadata,
            colli.collect_events(),
        )
        .await;

        info!(colli_id = %cmd.colli_id, user_id = %actor, "Colli approved");
        Ok(saved)
    }
}
