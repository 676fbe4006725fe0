//! Cache backend implementations.
//!
//! Concrete implementations of the cache traits defined in
//! `eventdesk_core::cache`. Only the in-memory backend exists; cache
//! state is per-process and not shared across instances.

pub mod memory;
