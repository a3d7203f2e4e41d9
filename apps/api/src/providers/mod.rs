//! AI provider configuration records. Stored and served, never used to
//! call a model — enrichment is local static data.

pub mod handlers;
