//! Static in-memory data source.

mod repository;

pub use repository::StaticEventSource;
