//! Recommendation engine: static template catalog, the scorer that
//! ranks it against a user profile, and resource-link generation.

pub mod catalog;
pub mod handlers;
pub mod resources;
pub mod scorer;
