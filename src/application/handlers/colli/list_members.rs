//! ListMembersHandler - Query handler for a Colli's memberships.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::Membership;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::ColliRepository;

#[derive(Debug, Clone)]
pub struct ListMembersQuery {
    pub colli_id: ColliId,
}

/// Members visible to the requesting user.
#[derive(Debug, Clone)]
pub struct MemberList {
    pub accepted: Vec<Membership>,
    /// Pending join requests; `None` unless the requester manages the Colli.
    pub pending: Option<Vec<Membership>>,
}

/// Handler for listing members. Accepted members are public.
pub struct ListMembersHandler {
    repository: Arc<dyn ColliRepository>,
}

impl ListMembersHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListMembersQuery,
        metadata: CommandMetadata,
    ) -> Result<MemberList, UseCaseError> {
        let colli = load_colli(self.repository.as_ref(), &query.colli_id).await?;
        let pending = colli
            .is_manager(metadata.actor())
            .then(|| colli.pending_members());

        debug!(
            colli_id = %query.colli_id,
            user_id = %metadata.actor(),
            with_pending = pending.is_some(),
            "Listing members"
        );
        Ok(MemberList {
            accepted: colli.accepted_members(),
            pending,
        })
    }
}
