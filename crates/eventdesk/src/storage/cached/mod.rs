//! Cached repository decorators.

mod events;

pub use events::CachedEventRepository;
