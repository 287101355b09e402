//! SQLite storage engine
//!
//! Every method here is fallible and returns `Result`; the public store
//! applies the fail-silent policy on top. Statements are prepared once at
//! setup and reused via the connection's statement cache. Dropping a
//! `CachedStatement` resets it and returns it to the cache, so the reset
//! happens on every path out of an operation, early error returns included.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, params};
use url::Url;

use super::schema;
use crate::Result;
use crate::entry::{CacheEntry, from_unix_seconds, unix_seconds};
use crate::key::CacheKey;
use crate::location;

/// SQLite-backed engine for the entry table.
///
/// Owns the connection exclusively; the connection's statement cache owns
/// the four prepared statements for the backend's whole lifetime.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open a database file, creating it and its parent directory if absent.
    pub fn open(path: &Path) -> Result<Self> {
        location::ensure_db_dir(path)?;
        let conn = Connection::open(path)?;
        Self::setup(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::setup(conn)
    }

    fn setup(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;",
        )?;
        conn.execute(schema::CREATE_ENTRY_TABLE, [])?;
        conn.set_prepared_statement_cache_capacity(8);

        let backend = Self { conn };
        backend.warm_statements();
        Ok(backend)
    }

    /// Prepare the four statements once so later calls only fetch them from
    /// the cache. Best-effort: a statement that fails to prepare leaves the
    /// operations depending on it failing per-call without taking the other
    /// statements down with it.
    fn warm_statements(&self) {
        for sql in schema::prepared_statements() {
            if let Err(error) = self.conn.prepare_cached(sql) {
                tracing::warn!(%error, "failed to prepare statement");
            }
        }
    }

    /// Insert or wholly replace the row under `key`.
    ///
    /// SQLite copies the payload bytes during the call; nothing borrowed
    /// from the entry outlives the execute.
    pub fn store(&self, key: &CacheKey, entry: &CacheEntry) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(schema::UPSERT_ENTRY)?;
        stmt.execute(params![
            key.as_str(),
            entry.url.as_str(),
            entry.data,
            entry.content_type,
            entry.time_to_live.map(|ttl| ttl.as_secs() as i64),
            unix_seconds(entry.created_at),
            unix_seconds(entry.modified_at),
        ])?;
        Ok(())
    }

    /// Load the row under `key`, if any.
    ///
    /// A row that cannot be decoded back into an entry (locator no longer
    /// parses, content type column is NULL) is reported as absent rather
    /// than as an error.
    pub fn load(&self, key: &CacheKey) -> Result<Option<CacheEntry>> {
        let mut stmt = self.conn.prepare_cached(schema::SELECT_ENTRY)?;
        let row = stmt
            .query_row([key.as_str()], |row| {
                Ok(RawRow {
                    url: row.get(0)?,
                    data: row.get(1)?,
                    content_type: row.get(2)?,
                    ttl: row.get(3)?,
                    created_at: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            })
            .optional()?;

        Ok(row.and_then(decode_row))
    }

    /// Delete the row under `key`, if any.
    pub fn remove(&self, key: &CacheKey) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(schema::DELETE_ENTRY)?;
        stmt.execute([key.as_str()])?;
        Ok(())
    }

    /// Delete every row.
    pub fn remove_all(&self) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(schema::DELETE_ALL_ENTRIES)?;
        stmt.execute([])?;
        Ok(())
    }

    /// Count all rows.
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM entry", [], |row| row.get(0))?;
        Ok(count)
    }

    #[cfg(test)]
    pub(crate) fn raw_conn(&self) -> &Connection {
        &self.conn
    }
}

/// Column values exactly as SQLite returns them, before decode rules apply.
struct RawRow {
    url: String,
    data: Vec<u8>,
    content_type: Option<String>,
    ttl: Option<i64>,
    created_at: i64,
    updated_at: i64,
}

fn decode_row(row: RawRow) -> Option<CacheEntry> {
    // Missing content type means the row is unusable for the caller, so the
    // whole entry reads as absent.
    let content_type = row.content_type?;
    // Same for a stored locator that no longer parses.
    let url = Url::parse(&row.url).ok()?;

    Some(CacheEntry {
        url,
        data: row.data,
        content_type,
        time_to_live: row.ttl.map(|secs| Duration::from_secs(secs.max(0) as u64)),
        created_at: from_unix_seconds(row.created_at),
        modified_at: from_unix_seconds(row.updated_at),
    })
}
