//! In-memory Letter repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{ColliId, DomainError, LetterId};
use crate::domain::letter::Letter;
use crate::ports::LetterRepository;

#[derive(Default)]
pub struct InMemoryLetterRepository {
    letters: RwLock<HashMap<LetterId, Letter>>,
}

impl InMemoryLetterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LetterRepository for InMemoryLetterRepository {
    async fn save(&self, letter: &Letter) -> Result<Letter, DomainError> {
        self.letters
            .write()
            .await
            .insert(*letter.id(), letter.clone());
        Ok(letter.clone())
    }

    async fn find_by_id(&self, id: &LetterId) -> Result<Option<Letter>, DomainError> {
        Ok(self.letters.read().await.get(id).cloned())
    }

    async fn find_by_colli(&self, colli_id: &ColliId) -> Result<Vec<Letter>, DomainError> {
        let mut letters: Vec<Letter> = self
            .letters
            .read()
            .await
            .values()
            .filter(|l| l.colli_id() == colli_id)
            .cloned()
            .collect();
        letters.sort_by_key(|l| *l.created_at());
        Ok(letters)
    }

    async fn delete(&self, letter: &Letter) -> Result<bool, DomainError> {
        Ok(self.letters.write().await.remove(letter.id()).is_some())
    }
}
