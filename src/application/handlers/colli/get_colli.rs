//! GetColliHandler - Query handler for a single Colli.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::load_colli;
use crate::application::UseCaseError;
use crate::domain::colli::Colli;
use crate::domain::foundation::ColliId;
use crate::ports::ColliRepository;

/// Query for one Colli by ID.
#[derive(Debug, Clone)]
pub struct GetColliQuery {
    pub colli_id: ColliId,
}

/// Handler for retrieving a Colli. Collis are public; no actor check.
pub struct GetColliHandler {
    repository: Arc<dyn ColliRepository>,
}

impl GetColliHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetColliQuery) -> Result<Colli, UseCaseError> {
        debug!(colli_id = %query.colli_id, "Loading colli");
        load_colli(self.repository.as_ref(), &query.colli_id).await
    }
}
