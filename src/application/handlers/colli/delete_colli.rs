//! DeleteColliHandler - Command handler for hard-deleting a Colli.

use std::sync::Arc;
use tracing::info;

use crate::application::authorization::require_manager_or_admin;
use crate::application::errors::Entity;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::ports::{ColliRepository, UserRepository};

/// Command to delete a Colli and its memberships.
#[derive(Debug, Clone)]
pub struct DeleteColliCommand {
    pub colli_id: ColliId,
}

/// Handler for deleting Collis. The manager or an admin may delete.
pub struct DeleteColliHandler {
    repository: Arc<dyn ColliRepository>,
    users: Arc<dyn UserRepository>,
}

impl DeleteColliHandler {
    pub fn new(repository: Arc<dyn ColliRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repository, users }
    }

    pub async fn handle(
        &self,
        cmd: DeleteColliCommand,
        metadata: CommandMetadata,
    ) -> Result<(), UseCaseError> {
        let actor = metadata.actor();
        let colli = load_colli(self.repository.as_ref(), &cmd.colli_id).await?;
        require_manager_or_admin(&colli, self.users.as_ref(), actor, "delete this colli").await?;

        // A concurrent delete may win between load and delete.
        if !self.repository.delete(&colli).await? {
            return Err(UseCaseError::not_found(Entity::Colli, cmd.colli_id));
        }

        info!(colli_id = %cmd.colli_id, user_id = %actor, "Colli deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{as_user, Fixture};
    use crate::domain::foundation::ErrorCode;

    fn handler(fx: &Fixture) -> DeleteColliHandler {
        DeleteColliHandler::new(fx.collis.clone(), fx.users.clone())
    }

    #[tokio::test]
    async fn manager_deletes_colli() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        handler(&fx)
            .handle(DeleteColliCommand { colli_id: *colli.id() }, as_user("alice"))
            .await
            .unwrap();

        assert!(fx.collis.find_by_id(colli.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn admin_deletes_pending_colli_without_manager() {
        let fx = Fixture::new();
        let colli = fx.pending_colli().await;

        let result = handler(&fx)
            .handle(DeleteColliCommand { colli_id: *colli.id() }, as_user("root"))
            .await;

        assert!(result.is_ok());
        assert_eq!(fx.collis.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn creator_of_pending_colli_is_not_yet_manager() {
        let fx = Fixture::new();
        let colli = fx.pending_colli().await;

        let err = handler(&fx)
            .handle(DeleteColliCommand { colli_id: *colli.id() }, as_user("alice"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let cmd = DeleteColliCommand { colli_id: *colli.id() };

        handler(&fx).handle(cmd.clone(), as_user("alice")).await.unwrap();
        let err = handler(&fx).handle(cmd, as_user("alice")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ColliNotFound);
    }
}
