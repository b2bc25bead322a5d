//! CreateColliHandler - Command handler for proposing a new Colli.

use std::sync::Arc;
use tracing::info;

use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::CommandMetadata;
use crate::ports::ColliRepository;

/// Command to propose a Colli. The acting user becomes its creator.
#[derive(Debug, Clone)]
pub struct CreateColliCommand {
    pub name: String,
    pub theme: String,
    pub description: Option<String>,
}

/// Handler for creating Collis. New Collis wait in PENDING for an admin.
pub struct CreateColliHandler {
    repository: Arc<dyn ColliRepository>,
}

impl CreateColliHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateColliCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let colli = Colli::create(cmd.name, cmd.theme, metadata.actor().clone(), cmd.description)?;
        let saved = self.repository.save(&colli).await?;

        info!(
            colli_id = %saved.id(),
            user_id = %metadata.actor(),
            "Colli created, awaiting approval"
        );
        Ok(saved)
    }
}
