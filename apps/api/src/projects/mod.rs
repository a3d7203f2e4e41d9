//! Saved projects: the persisted list a user copies suggestions into,
//! plus their append-only reviews.

pub mod handlers;
pub mod reviews;
