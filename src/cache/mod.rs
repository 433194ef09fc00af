// Cache module for local filesystem snapshots.
// Stores pet API responses for fast startup; entries are dropped on
// invalidation.

pub mod paths;
pub mod store;

pub use store::{CachedData, DEFAULT_TTL, delete, read_cached, read_if_valid, write_cached};
