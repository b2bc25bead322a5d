//! User repository port (read-only).
//!
//! Used solely to resolve a user's platform role for administrative
//! overrides. Account management lives outside this crate.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Read-only lookup of platform users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
