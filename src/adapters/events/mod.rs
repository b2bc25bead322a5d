//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus with subscribers
//! - `TracingEventPublisher` - Logs every event, delivers nowhere

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
