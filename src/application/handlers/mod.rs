//! Application handlers.
//!
//! Command handlers follow `load -> authorize -> mutate -> save ->
//! collect_events -> publish`. Query handlers only load.

pub mod colli;
pub mod comment;
pub mod letter;

use crate::domain::colli::Colli;
use crate::domain::foundation::{ColliId, LetterId};
use crate::domain::letter::Letter;
use crate::ports::{ColliRepository, LetterRepository};

use super::errors::Entity;
use super::UseCaseError;

pub(crate) async fn load_colli(
    repository: &dyn ColliRepository,
    id: &ColliId,
) -> Result<Colli, UseCaseError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| UseCaseError::not_found(Entity::Colli, id))
}

pub(crate) async fn load_letter(
    repository: &dyn LetterRepository,
    id: &LetterId,
) -> Result<Letter, UseCaseError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| UseCaseError::not_found(Entity::Letter, id))
}
