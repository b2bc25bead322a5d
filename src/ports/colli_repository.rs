//! Colli repository port.
//!
//! Persists the whole aggregate, memberships included. A Colli is always
//! loaded and saved as one unit; there is no separate membership store.
//!
//! # Design
//!
//! - **Whole-aggregate writes**: `save` inserts or replaces
//! - **Hard delete**: no soft-delete beyond `ColliStatus`
//! - **Last write wins**: no optimistic locking at this boundary

use async_trait::async_trait;

use crate::domain::colli::{Colli, ColliStatus};
use crate::domain::foundation::{ColliId, DomainError, UserId};

/// Repository port for Colli aggregate persistence.
///
/// Implementations must never persist pending domain events; the
/// returned snapshot is what a later `find_by_id` will load.
#[async_trait]
pub trait ColliRepository: Send + Sync {
    /// Insert or replace a Colli.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, colli: &Colli) -> Result<Colli, DomainError>;

    /// Find a Colli by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ColliId) -> Result<Option<Colli>, DomainError>;

    /// One page of Collis, newest first. `page` is 1-based.
    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<Colli>, DomainError>;

    /// All Collis in the given status, newest first.
    async fn find_by_status(&self, status: ColliStatus) -> Result<Vec<Colli>, DomainError>;

    /// All Collis created by a user, newest first.
    async fn find_by_creator(&self, creator_id: &UserId) -> Result<Vec<Colli>, DomainError>;

    /// Hard-delete a Colli. Returns `false` if it did not exist.
    async fn delete(&self, colli: &Colli) -> Result<bool, DomainError>;

    /// Total number of Collis.
    async fn count(&self) -> Result<u64, DomainError>;

    /// Number of Collis in the given status.
    async fn count_by_status(&self, status: ColliStatus) -> Result<u64, DomainError>;
}
