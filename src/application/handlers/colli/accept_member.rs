//! AcceptMemberHandler - Command handler for admitting a pending member.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_member_manager;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, CommandMetadata, UserId};
use crate::ports::ColliRepository;

/// Command to accept a user's pending membership.
#[derive(Debug, Clone)]
pub struct AcceptMemberCommand {
    pub colli_id: ColliId,
    pub user_id: UserId,
}

/// Handler for accepting members. Only accepted managers may decide.
pub struct AcceptMemberHandler {
    repository: Arc<dyn ColliRepository>,
}

impl AcceptMemberHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AcceptMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        require_member_manager(&colli, actor, "accept members")?;

        colli.accept_member(&cmd.user_id)?;
        let saved = self.repository.save(&colli).await?;

        info!(
            colli_id = %cmd.colli_id,
            user_id = %actor,
            member_id = %cmd.user_id,
            "Member accepted"
        );
        Ok(saved)
    }
}
