//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `colli` - Colli aggregate, memberships, roles and lifecycle events
//! - `letter` - Letters posted inside a Colli
//! - `comment` - Comments on letters
//! - `user` - Platform user read model

pub mod colli;
pub mod comment;
pub mod foundation;
pub mod letter;
pub mod user;
