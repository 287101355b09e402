//! # Urlstash - Durable URL-keyed cache store
//!
//! A persistence layer mapping a resource locator to a previously fetched
//! payload (bytes, content type, timestamps, optional expiry), backed by an
//! embedded SQLite file.
//!
//! Urlstash provides:
//! - A single-table SQLite store with upsert semantics per canonical URL
//! - A fail-silent public surface: store/load/remove/remove-all never raise
//! - An injectable path provider for the backing file location
//! - Thread-safe access from arbitrary caller threads
//!
//! The store is a best-effort optimization for a fetch/decode pipeline: any
//! internal failure degrades to "cold cache" rather than surfacing an error.
//! TTL values are persisted verbatim; expiry enforcement lives in the caller.

pub mod entry;
pub mod key;
pub mod location;
pub mod storage;
pub mod store;

// Re-exports for convenient access
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use location::{DefaultPathProvider, PathProvider};
pub use store::CacheStore;

/// Result type alias for urlstash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for urlstash internals.
///
/// These never cross the [`CacheStore`] boundary: public operations discard
/// them after logging. They exist so each internal step (open, prepare,
/// bind, step) has an auditable, testable failure path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No platform cache directory available")]
    CacheDirUnavailable,
}
