//! ListLettersHandler - Query handler for the letters of a Colli.

use std::sync::Arc;
use tracing::debug;

use crate::application::authorization::require_reader;
use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::foundation::{ColliId, CommandMetadata};
use crate::domain::letter::Letter;
use crate::ports::{ColliRepository, LetterRepository};

#[derive(Debug, Clone)]
pub struct ListLettersQuery {
    pub colli_id: ColliId,
}

/// Handler for reading letters. ACCEPTED members only; the Colli must be
/// ACTIVE or COMPLETED.
pub struct ListLettersHandler {
    collis: Arc<dyn ColliRepository>,
    letters: Arc<dyn LetterRepository>,
}

impl ListLettersHandler {
    pub fn new(collis: Arc<dyn ColliRepository>, letters: Arc<dyn LetterRepository>) -> Self {
        Self { collis, letters }
    }

    pub async fn handle(
        &self,
        query: ListLettersQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<Letter>, UseCaseError> {
        let colli = load_colli(self.collis.as_ref(), &query.colli_id).await?;
        require_reader(&colli, metadata.actor(), "read letters")?;

        let letters = self.letters.find_by_colli(&query.colli_id).await?;
        debug!(colli_id = %query.colli_id, count = letters.len(), "Listed letters");
        Ok(letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{as_user, user, Fixture};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn member_reads_letters_in_posting_order() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;
        for content in ["Première lettre", "Deuxième lettre"] {
            let letter = Letter::create_text(*colli.id(), user("bob"), content).unwrap();
            fx.letters.save(&letter).await.unwrap();
        }

        let letters = ListLettersHandler::new(fx.collis.clone(), fx.letters.clone())
            .handle(ListLettersQuery { colli_id: *colli.id() }, as_user("alice"))
            .await
            .unwrap();

        assert_eq!(letters.len(), 2);
    }

    #[tokio::test]
    async fn letters_stay_readable_after_completion() {
        let fx = Fixture::new();
        let mut colli = fx.active_colli().await;
        let letter = Letter::create_text(*colli.id(), user("bob"), "Dernière lettre").unwrap();
        fx.letters.save(&letter).await.unwrap();
        colli.complete().unwrap();
        fx.collis.save(&colli).await.unwrap();

        let letters = ListLettersHandler::new(fx.collis.clone(), fx.letters.clone())
            .handle(ListLettersQuery { colli_id: *colli.id() }, as_user("bob"))
            .await
            .unwrap();

        assert_eq!(letters.len(), 1);
    }

    #[tokio::test]
    async fn outsider_cannot_read() {
        let fx = Fixture::new();
        let colli = fx.active_colli().await;

        let err = ListLettersHandler::new(fx.collis.clone(), fx.letters.clone())
            .handle(ListLettersQuery { colli_id: *colli.id() }, as_user("dave"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
