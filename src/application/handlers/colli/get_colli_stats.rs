//! GetColliStatsHandler - Query handler for Colli counts per status.

use std::sync::Arc;
use tracing::debug;

use crate::application::UseCaseError;
use crate::domain::colli::ColliStatus;
use crate::ports::ColliRepository;

/// Colli counts, e.g. for a moderation dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColliStats {
    pub total: u64,
    pub pending: u64,
    pub active: u64,
    pub rejected: u64,
    pub completed: u64,
}

impl ColliStats {
    pub fn count_for(&self, status: ColliStatus) -> u64 {
        match status {
            ColliStatus::Pending => self.pending,
            ColliStatus::Active => self.active,
            ColliStatus::Rejected => self.rejected,
            ColliStatus::Completed => self.completed,
        }
    }
}

pub struct GetColliStatsHandler {
    repository: Arc<dyn ColliRepository>,
}

impl GetColliStatsHandler {
    pub fn new(repository: Arc<dyn ColliRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ColliStats, UseCaseError> {
        let mut stats = ColliStats {
            total: self.repository.count().await?,
            ..Default::default()
        };
        for status in ColliStatus::ALL {
            let count = self.repository.count_by_status(status).await?;
            match status {
                ColliStatus::Pending => stats.pending = count,
                ColliStatus::Active => stats.active = count,
                ColliStatus::Rejected => stats.rejected = count,
                ColliStatus::Completed => stats.completed = count,
            }
        }

        debug!(total = stats.total, pending = stats.pending, "Computed colli stats");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::Fixture;

    #[tokio::test]
    async fn counts_every_status() {
        let fx = Fixture::new();
        fx.pending_colli().await;
        fx.pending_colli().await;
        fx.active_colli().await;

        let stats = GetColliStatsHandler::new(fx.collis.clone())
            .handle()
            .await
            .unwrap();

        assert_eq!(
            stats,
            ColliStats {
                total: 3,
                pending: 2,
                active: 1,
                rejected: 0,
                completed: 0,
            }
        );
        assert_eq!(stats.count_for(ColliStatus::Active), 1);
    }
}
