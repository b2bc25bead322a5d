//! In-memory Colli repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::colli::{Colli, ColliStatus};
use crate::domain::foundation::{ColliId, DomainError, UserId};
use crate::ports::ColliRepository;

/// Colli store backed by a `HashMap`.
///
/// Stored snapshots never carry pending events: whatever the caller has
/// not collected yet stays with the caller's copy.
#[derive(Default)]
pub struct InMemoryColliRepository {
    collis: RwLock<HashMap<ColliId, Colli>>,
}

impl InMemoryColliRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut collis: Vec<Colli>) -> Vec<Colli> {
        collis.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
        });
        collis
    }

    async fn filtered(&self, keep: impl Fn(&Colli) -> bool) -> Vec<Colli> {
        let collis = self.collis.read().await;
        Self::newest_first(collis.values().filter(|c| keep(c)).cloned().collect())
    }
}

#[async_trait]
impl ColliRepository for InMemoryColliRepository {
    async fn save(&self, colli: &Colli) -> Result<Colli, DomainError> {
        let mut snapshot = colli.clone();
        snapshot.collect_events();
        self.collis
            .write()
            .await
            .insert(*snapshot.id(), snapshot.clone());
        Ok(snapshot)
    }

    async fn find_by_id(&self, id: &ColliId) -> Result<Option<Colli>, DomainError> {
        Ok(self.collis.read().await.get(id).cloned())
    }

    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<Colli>, DomainError> {
        let skip = (page.max(1) as usize - 1).saturating_mul(per_page as usize);
        Ok(self
            .filtered(|_| true)
            .await
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect())
    }

    async fn find_by_status(&self, status: ColliStatus) -> Result<Vec<Colli>, DomainError> {
        Ok(self.filtered(|c| c.status() == status).await)
    }

    async fn find_by_creator(&self, creator_id: &UserId) -> Result<Vec<Colli>, DomainError> {
        Ok(self.filtered(|c| c.creator_id() == creator_id).await)
    }

    async fn delete(&self, colli: &Colli) -> Result<bool, DomainError> {
        Ok(self.collis.write().await.remove(colli.id()).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.collis.read().await.len() as u64)
    }

    async fn count_by_status(&self, status: ColliStatus) -> Result<u64, DomainError> {
        Ok(self
            .collis
            .read()
            .await
            .values()
            .filter(|c| c.status() == status)
            .count() as u64)
    }
}
