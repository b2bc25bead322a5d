//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus and publisher implementations
//! - `memory` - In-memory repositories

pub mod events;
pub mod memory;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use memory::{
    InMemoryColliRepository, InMemoryCommentRepository, InMemoryLetterRepository,
    InMemoryUserRepository,
};
