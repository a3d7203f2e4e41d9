//! Profile persistence: the user's self-reported skill list.

pub mod handlers;
