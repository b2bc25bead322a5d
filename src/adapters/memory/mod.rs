//! In-memory repository adapters.
//!
//! Used by tests and single-process deployments. Each store sits behind a
//! tokio `RwLock`; writes are last-write-wins like the port contract.

mod colli_repository;
mod comment_repository;
mod letter_repository;
mod user_repository;

pub use colli_repository::InMemoryColliRepository;
pub use comment_repository::InMemoryCommentRepository;
pub use letter_repository::InMemoryLetterRepository;
pub use user_repository::InMemoryUserRepository;
