//! Database schema and statement definitions
//!
//! The `key` column is the canonical URL string; `url` stores the same
//! locator for re-parsing at load time. `ttl` is NULL when the entry has no
//! expiry recorded, which is distinct from a stored zero.

/// SQL to create the entry table
pub const CREATE_ENTRY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entry (
    key          TEXT PRIMARY KEY,
    url          TEXT NOT NULL,
    data         BLOB NOT NULL,
    content_type TEXT,
    ttl          INTEGER,
    created_at   INTEGER NOT NULL,
    updated_at   INTEGER NOT NULL
)
"#;

/// Upsert: a second store under the same key fully replaces the row
pub const UPSERT_ENTRY: &str = r#"
INSERT OR REPLACE INTO entry (key, url, data, content_type, ttl, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

/// Select a single row by key
pub const SELECT_ENTRY: &str = r#"
SELECT url, data, content_type, ttl, created_at, updated_at FROM entry WHERE key = ?1
"#;

/// Delete a single row by key
pub const DELETE_ENTRY: &str = "DELETE FROM entry WHERE key = ?1";

/// Delete every row
pub const DELETE_ALL_ENTRIES: &str = "DELETE FROM entry";

/// The four statements prepared once at connection setup, in warm order
pub fn prepared_statements() -> [&'static str; 4] {
    [UPSERT_ENTRY, SELECT_ENTRY, DELETE_ENTRY, DELETE_ALL_ENTRIES]
}
