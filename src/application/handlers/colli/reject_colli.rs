//! RejectColliHandler - Command handler for turning down a pending Colli.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_admin;
use crate::application::handlers::load_colli;
use crate::application::publishing::publish_colli_events;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::{ColliRepository, EventPublisher, UserRepository};

/// Command to reject a Colli, with an optional reason shown to its creator.
#[derive(Debug, Clone)]
pub struct RejectColliCommand {
    pub colli_id: ColliId,
    pub reason: Option<String>,
}

/// Handler for rejecting Collis. Only platform admins may reject.
pub struct RejectColliHandler {
    repository: Arc<dyn ColliRepository>,
    users: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RejectColliHandler {
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
        cmd: RejectColliCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let actor = metadata.actor();
        require_admin(self.users.as_ref(), actor, "reject collis").await?;

        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        let reason = cmd
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        colli.reject(reason, Some(actor.clone()))?;

        let saved = self.repository.save(&colli).await?;
        publish_colli_events(
            self.event_publisher.as_ref(),
            &metadata,
            colli.collect_events(),
        )
        .await;

        info!(colli_id = %cmd.colli_id, user_id = %actor, "Colli rejected");
        Ok(saved)
    }
}
