//! Colli backend - collaborative letter-writing communities.
//!
//! The core of this crate is the `Colli` aggregate: a community with an
//! approval lifecycle, a per-user membership workflow and a role hierarchy.
//! Membership decides who may post and delete letters and comments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
