//! CompleteColliHandler - Command handler for closing an active Colli.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_manager_or_admin;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::{ColliRepository, UserRepository};

/// Command to complete a Colli.
#[derive(Debug, Clone)]
pub struct CompleteColliCommand {
    pub colli_id: ColliId,
}

/// Handler for completing Collis. The manager or an admin may complete.
///
/// Completion emits no event.
pub struct CompleteColliHandler {
    repository: Arc<dyn ColliRepository>,
    users: Arc<dyn UserRepository>,
}

impl CompleteColliHandler {
    pub fn new(repository: Arc<dyn ColliRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repository, users }
    }

    pub async fn handle(
        &self,
        cmd: CompleteColliCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        require_manager_or_admin(&colli, self.users.as_ref(), actor, "complete this colli")
            .await?;

        colli.complete()?;
        let saved = self.repository.save(&colli).await?;

        info!(colli_id = %cmd.colli_id, user_id = %actor, "Colli completed");
        Ok(saved)
    }
}
