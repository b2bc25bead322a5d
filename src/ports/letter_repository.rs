//! Letter repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ColliId, DomainError, LetterId};
use crate::domain::letter::Letter;

/// Repository port for Letter persistence.
#[async_trait]
pub trait LetterRepository: Send + Sync {
    /// Insert or replace a letter.
    async fn save(&self, letter: &Letter) -> Result<Letter, DomainError>;

    /// Find a letter by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &LetterId) -> Result<Option<Letter>, DomainError>;

    /// Letters of a Colli, oldest first.
    async fn find_by_colli(&self, colli_id: &ColliId) -> Result<Vec<Letter>, DomainError>;

    /// Hard-delete a letter. Returns `false` if it did not exist.
    async fn delete(&self, letter: &Letter) -> Result<bool, DomainError>;
}
