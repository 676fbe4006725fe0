//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `eventdesk_core::storage`: the static in-memory data source and the
//! caching decorator that fronts it.

pub mod cached;
pub mod source;
