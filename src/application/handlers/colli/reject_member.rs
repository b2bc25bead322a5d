//! RejectMemberHandler - Command handler for declining a join request.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_member_manager;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, CommandMetadata, UserId};
use crate::ports::ColliRepository;

/// Command to reject a user's pending membership.
///
/// The REJECTED record is kept, so the user cannot request again.
#[derive(Debug, Clone)]
pub struct RejectMemberCommand {
    pub colli_id: ColliId,
    pub user_id: UserId,
}

/// Handler for rejecting members. Only accepted managers may decide.
pub struct RejectMemberHandler {
    repository: Arc<dyn ColliRepository>,
}

impl RejectMemberHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RejectMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<Colli, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        require_member_manager(&colli, actor, "reject members")?;

        colli.reject_member(&cmd.user_id)?;
        let saved = self.repository.save(&colli).await?;

        info!(
            colli_id = %cmd.colli_id,
            user_id = %actor,
            member_id = %cmd.user_id,
            "Member rejected"
        );
        Ok(saved)
    }
}
