//! ListCollisHandler - Query handler for paginated Colli listings.

use std::sync::Arc;
use tracing::debug;

use crate::application::UseCaseError;
use crate::config::PaginationConfig;
use crate::domain::colli::{Colli, ColliStatus};
use crate::domain::foundation::UserId;
use crate::ports::ColliRepository;

/// Optional narrowing of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColliFilter {
    #[default]
    All,
    Status(ColliStatus),
    Creator(UserId),
}

/// Query for one page of Collis. Missing paging values use the defaults.
#[derive(Debug, Clone, Default)]
pub struct ListCollisQuery {
    pub filter: ColliFilter,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// One page of results.
#[derive(Debug, Clone)]
pub struct ColliPage {
    pub items: Vec<Colli>,
    pub page: u32,
    pub per_page: u32,
    /// Number of Collis matching the filter, across all pages.
    pub total: u64,
}

impl ColliPage {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        let per_page = u64::from(self.per_page);
        (self.total + per_page - 1) / per_page
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// Handler for listing Collis, newest first.
pub struct ListCollisHandler {
    repository: Arc<dyn ColliRepository>,
    pagination: PaginationConfig,
}

impl ListCollisHandler {
    pub fn new(repository: Arc<dyn ColliRepository>, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    pub async fn handle(&self, query: ListCollisQuery) -> Result<ColliPage, UseCaseError> {
        let (page, per_page) = self.pagination.clamp(query.page, query.per_page);
        debug!(page, per_page, filter = ?query.filter, "Listing collis");

        let (items, total) = match &query.filter {
            ColliFilter::All => {
                let items = self.repository.find_all(page, per_page).await?;
                (items, self.repository.count().await?)
            }
            ColliFilter::Status(status) => {
                paginate(self.repository.find_by_status(*status).await?, page, per_page)
            }
            ColliFilter::Creator(creator_id) => {
                paginate(self.repository.find_by_creator(creator_id).await?, page, per_page)
            }
        };

        Ok(ColliPage {
            items,
            page,
            per_page,
            total,
        })
    }
}

fn paginate(all: Vec<Colli>, page: u32, per_page: u32) -> (Vec<Colli>, u64) {
    let total = all.len() as u64;
    let skip = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    let items = all.into_iter().skip(skip).take(per_page as usize).collect();
    (items, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{user, Fixture};

    async fn seed(fx: &Fixture, count: usize) {
        for i in 0..count {
            let colli = Colli::create(format!("Colli {i}"), "Voyages", user("bob"), None).unwrap();
            fx.collis.save(&colli).await.unwrap();
        }
    }

    fn handler(fx: &Fixture) -> ListCollisHandler {
        ListCollisHandler::new(
            fx.collis.clone(),
            PaginationConfig {
                default_per_page: 2,
                max_per_page: 3,
            },
        )
    }

    #[tokio::test]
    async fn uses_default_page_size() {
        let fx = Fixture::new();
        seed(&fx, 5).await;

        let page = handler(&fx).handle(ListCollisQuery::default()).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!((page.page, page.per_page, page.total), (1, 2, 5));
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn oversized_page_is_clamped() {
        let fx = Fixture::new();
        seed(&fx, 5).await;

        let page = handler(&fx)
            .handle(ListCollisQuery {
                per_page: Some(50),
                page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.per_page, 3);
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn filters_by_status_and_creator() {
        let fx = Fixture::new();
        seed(&fx, 2).await;
        fx.active_colli().await;

        let active = handler(&fx)
            .handle(ListCollisQuery {
                filter: ColliFilter::Status(ColliStatus::Active),
                ..Default::default()
            })
            .await
            .unwrap();
        let by_bob = handler(&fx)
            .handle(ListCollisQuery {
                filter: ColliFilter::Creator(user("bob")),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(active.total, 1);
        assert_eq!(active.items[0].creator_id(), &user("alice"));
        assert_eq!(by_bob.total, 2);
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let (items, total) = paginate(Vec::new(), 4, 10);
        assert!(items.is_empty());
        assert_eq!(total, 0);
    }
}
