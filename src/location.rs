//! Backing file location
//!
//! The store never decides where its database lives; a [`PathProvider`]
//! does. The default resolves into the platform cache directory, and tests
//! inject a temp-dir provider instead.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Supplies the absolute path of the backing database file.
pub trait PathProvider {
    fn database_path(&self) -> Result<PathBuf>;
}

/// Default provider: `<platform cache dir>/com.<vendor>.cache.db`.
#[derive(Debug, Clone)]
pub struct DefaultPathProvider {
    vendor: String,
}

impl DefaultPathProvider {
    pub fn new(vendor: impl Into<String>) -> Self {
        Self { vendor: vendor.into() }
    }
}

impl PathProvider for DefaultPathProvider {
    fn database_path(&self) -> Result<PathBuf> {
        let base = dirs::cache_dir().ok_or(Error::CacheDirUnavailable)?;
        Ok(base.join(format!("com.{}.cache.db", self.vendor)))
    }
}

/// Create the database file's parent directory if it does not exist yet.
pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        let provider = DefaultPathProvider::new("acme");
        // Skip on platforms without a cache dir (CI containers with no HOME)
        if let Ok(path) = provider.database_path() {
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some("com.acme.cache.db")
            );
        }
    }

    #[test]
    fn test_ensure_db_dir_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("dir").join("cache.db");
        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().exists());

        // Idempotent on an existing directory
        ensure_db_dir(&db_path).unwrap();
    }

    #[test]
    fn test_injected_provider() {
        struct FixedPath(PathBuf);
        impl PathProvider for FixedPath {
            fn database_path(&self) -> Result<PathBuf> {
                Ok(self.0.clone())
            }
        }

        let provider = FixedPath(PathBuf::from("/tmp/test-cache.db"));
        assert_eq!(provider.database_path().unwrap(), PathBuf::from("/tmp/test-cache.db"));
    }
}
