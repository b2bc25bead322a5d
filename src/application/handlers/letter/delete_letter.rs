//! DeleteLetterHandler - Command handler for removing a letter.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::authorization::can_delete_content;
use crate::application::errors::Entity;
use crate::application::UseCaseError;
use crate::domain::foundation::{CommandMetadata, LetterId};
use crate::ports::{ColliRepository, LetterRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DeleteLetterCommand {
    pub letter_id: LetterId,
}

/// Handler for deleting letters.
///
/// Allowed for the author, a manager of the letter's Colli, or a platform
/// admin. The admin check only runs when a user repository is wired.
pub struct DeleteLetterHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
    users: Option<Arc<dyn UserRepository>>,
}

impl DeleteLetterHandler {
    pub fn new(
        collis: Arc<dyn ColliRepository>,
        letters: Arc<dyn LetterRepository>,
        users: Option<Arc<dyn UserRepository>>,
    ) -> Self {
        Self {
            collis,
            letters,
            users,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteLetterCommand,
        metadata: CommandMetadata,
    ) -> Result<(), UseCaseError> {
        let actor = metadata.actor();
        let letter = self
            .letters
            .find_by_id(&cmd.letter_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(Entity::Letter, cmd.letter_id))?;
        let colli = self.collis.find_by_id(letter.colli_id()).await?;

        let allowed = can_delete_content(
            letter.is_author(actor),
            colli.as_ref(),
            self.users.as_deref(),
            actor,
        )
        .await?;
        if !allowed {
            warn!(letter_id = %cmd.letter_id, user_id = %actor, "Denied: letter deletion");
            return Err(UseCaseError::forbidden(
                "only the author, a colli manager or an administrator can delete this letter",
            ));
        }

        if !self.letters.delete(&letter).await? {
            return Err(UseCaseError::not_found(Entity::Letter, cmd.letter_id));
        }

        info!(
            colli_id = %letter.colli_id(),
            user_id = %actor,
            letter_id = %cmd.letter_id,
            "Letter deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{as_user, user, Fixture};
    use crate::domain::colli::Colli;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::letter::Letter;

    async fn letter_by(fx: &Fixture, colli: &Colli, sender: &str) -> Letter {
        let letter =
            Letter::create_text(*colli.id(), user(sender), "Une lettre assez longue").unwrap();
        fx.letters.save(&letter).await.unwrap()
    }

    fn with_users(fx: &Fixture) -> DeleteLetterHandler {
        DeleteLetterHandler::new(fx.collis.clone(), fx.letters.clone(), Some(fx.users.clone()))
    }

    fn without_users(fx: &Fixture) -> DeleteLetterHandler {
        DeleteLetterHandler::new(fx.collis.clone(), fx.letters.clone(), None)
    }

    fn delete(letter: &Letter) -> DeleteLetterCommand {
        DeleteLetterCommand {
            letter_id: *letter.id(),
        }
    }

    #[tokio::test]
    async fn author_deletes_own_letter() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let letter = letter_by(&fx, &colli, "bob").await;

        without_users(&fx).handle(delete(&letter), as_user("bob")).await.unwrap();

        assert!(fx.letters.find_by_id(letter.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn manager_deletes_members_letter() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let letter = letter_by(&fx, &colli, "bob").await;

        let result = without_users(&fx).handle(delete(&letter), as_user("alice")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn admin_override_requires_user_repository() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let letter = letter_by(&fx, &colli, "bob").await;

        let skipped = without_users(&fx)
            .handle(delete(&letter), as_user("root"))
            .await
            .unwrap_err();
        assert_eq!(skipped.code(), ErrorCode::Forbidden);

        with_users(&fx).handle(delete(&letter), as_user("root")).await.unwrap();
        assert!(fx.letters.find_by_id(letter.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn other_member_is_forbidden() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let letter = letter_by(&fx, &colli, "alice").await;

        let err = with_users(&fx)
            .handle(delete(&letter), as_user("bob"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(fx.letters.find_by_id(letter.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn author_can_delete_after_colli_is_gone() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        let letter = letter_by(&fx, &colli, "bob").await;
        fx.collis.delete(&colli).await.unwrap();

        assert!(without_users(&fx).handle(delete(&letter), as_user("bob")).await.is_ok());
    }

    #[tokio::test]
    async fn missing_letter_is_not_found() {
        let fx = Fixture::new();

        let err = with_users(&fx)
            .handle(
                DeleteLetterCommand {
                    letter_id: LetterId::new(),
                },
                as_user("alice"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::LetterNotFound);
    }
}
