//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - entry(key, url, data, content_type, ttl, created_at, updated_at)
//!
//! [`SqliteBackend`] is the fallible engine: every step (open, schema,
//! prepare, bind, step) returns a `Result`. The fail-silent policy the
//! public store promises is applied one layer up, in [`crate::store`].

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteBackend;
