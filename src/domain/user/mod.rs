//! User read model.
//!
//! Accounts are owned elsewhere; this core only needs to know a user's
//! platform role to resolve administrative overrides.

mod model;

pub use model::{User, UserRole};
