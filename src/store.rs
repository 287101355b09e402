//! Public cache store - the fail-silent boundary
//!
//! `CacheStore` wraps the fallible [`SqliteBackend`] and deliberately
//! discards every internal error after logging it. To its callers the store
//! is a best-effort cache: a failed `store` or `remove` has no observable
//! effect, a failed `load` is a miss, and a store that could not open at
//! all behaves like an always-empty cache. Nothing here panics or returns
//! an error.

use std::sync::Mutex;

use url::Url;

use crate::Result;
use crate::entry::CacheEntry;
use crate::key::CacheKey;
use crate::location::PathProvider;
use crate::storage::SqliteBackend;

/// Durable URL-keyed cache store.
///
/// Safe to share across threads: the backend sits behind a mutex held for
/// each complete bind/execute/reset sequence, so concurrent operations on
/// the shared prepared statements serialize.
pub struct CacheStore {
    backend: Option<Mutex<SqliteBackend>>,
}

impl CacheStore {
    /// Open the store at the provider's path. Never fails: if the file
    /// cannot be opened or the schema cannot be created, the store comes up
    /// disabled and every operation is a no-op.
    pub fn new(provider: &dyn PathProvider) -> Self {
        let opened = provider
            .database_path()
            .and_then(|path| SqliteBackend::open(&path));
        Self::from_backend(opened)
    }

    /// Open an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::from_backend(SqliteBackend::open_in_memory())
    }

    fn from_backend(opened: Result<SqliteBackend>) -> Self {
        match opened {
            Ok(backend) => Self { backend: Some(Mutex::new(backend)) },
            Err(error) => {
                tracing::warn!(%error, "cache store disabled, operations will no-op");
                Self { backend: None }
            }
        }
    }

    /// Whether the backing database opened successfully.
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Persist `entry` under the locator's canonical key, replacing any
    /// prior row.
    pub fn store(&self, entry: &CacheEntry, for_url: &Url) {
        let key = CacheKey::from_url(for_url);
        self.run("store", |backend| backend.store(&key, entry));
    }

    /// Load the entry cached under the locator, if any.
    pub fn load(&self, for_url: &Url) -> Option<CacheEntry> {
        let key = CacheKey::from_url(for_url);
        self.run("load", |backend| backend.load(&key)).flatten()
    }

    /// Remove the entry cached under the locator, if any.
    pub fn remove(&self, for_url: &Url) {
        let key = CacheKey::from_url(for_url);
        self.run("remove", |backend| backend.remove(&key));
    }

    /// Remove every cached entry.
    pub fn remove_all(&self) {
        self.run("remove_all", |backend| backend.remove_all());
    }

    /// Run one operation under the mutex, discarding its error at this
    /// boundary. A poisoned mutex is recovered rather than propagated; the
    /// backend holds no invariant a panicked operation could have broken
    /// mid-update that SQLite does not already guard.
    fn run<T>(&self, operation: &str, f: impl FnOnce(&SqliteBackend) -> Result<T>) -> Option<T> {
        let backend = self.backend.as_ref()?;
        let guard = match backend.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match f(&guard) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%error, operation, "cache operation failed, treating as no-op");
                None
            }
        }
    }
}
