//! PromoteMemberHandler - Command handler for changing a member's role.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_member_manager;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::{Colli, MemberRole};
use crate::domain::foundation::{ColliId, CommandMetadata, UserId};
use crate::ports::ColliRepository;

/// Command to set the role of an accepted member.
///
/// Any role may be assigned, including a lower one.
#[derive(Debug, Clone)]
pub struct PromoteMemberCommand {
    pub colli_id: ColliId,
    pub user_id: UserId,
    pub role: MemberRole,
}

/// Result of a role change.
#[derive(Debug, Clone)]
pub struct PromoteMemberResult {
    pub colli: Colli,
    pub previous_role: MemberRole,
}

/// Handler for role changes. Only accepted managers may change roles.
pub struct PromoteMemberHandler {
    repository: Arc<dyn ColliRepository>,
}

impl PromoteMemberHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: PromoteMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<PromoteMemberResult, UseCaseError> {
        let actor = metadata.actor();
        let mut colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        require_member_manager(&colli, actor, "change member roles")?;

        let previous_role = colli.promote_member(&cmd.user_id, cmd.role)?;
        let saved = self.repository.save(&colli).await?;

        info!(
            colli_id = %cmd.colli_id,
            user_id = %actor,
            member_id = %cmd.user_id,
            from = %previous_role,
            to = %cmd.role,
            "Member role changed"
        );
        Ok(PromoteMemberResult {
            colli: saved,
            previous_role,
        })
    }
}
