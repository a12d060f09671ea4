// SQLite-backed key-value store
// Holds the small bits of client state that outlive a session (favorites)

pub mod cache;

pub use cache::{CacheError, CacheManager};
