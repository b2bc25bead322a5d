//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports and
//! are injected into use cases as `Arc<dyn Port>`.
//!
//! ## Persistence Ports
//!
//! - `ColliRepository` - Colli aggregates with their memberships
//! - `LetterRepository` - Letters posted in a Colli
//! - `CommentRepository` - Comments on letters
//! - `UserRepository` - Read-only platform user lookup
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod colli_repository;
mod comment_repository;
mod event_publisher;
mod event_subscriber;
mod letter_repository;
mod user_repository;

pub use colli_repository::ColliRepository;
pub use comment_repository::CommentRepository;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use letter_repository::LetterRepository;
pub use user_repository::UserRepository;
