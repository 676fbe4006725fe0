//! eventdesk_core - domain types, storage traits and cache traits shared
//! by the eventdesk server and client.

pub mod cache;
pub mod events;
pub mod storage;
