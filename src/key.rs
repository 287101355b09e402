//! Cache key - stable row identity derived from a locator
//!
//! Every operation addresses a row by the canonical string form of its URL.
//! Two `Url` values that serialize to the same string address the same row,
//! so callers never have to worry about cosmetic differences the `url`
//! crate already normalizes away (host case, default ports, missing
//! trailing slash on a host-only URL).

use std::fmt;
use url::Url;

/// Primary key for a cache row: the canonical serialization of its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a locator.
    pub fn from_url(url: &Url) -> Self {
        Self(url.as_str().to_string())
    }

    /// The key as bound into SQL statements.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Url> for CacheKey {
    fn from(url: &Url) -> Self {
        Self::from_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_canonical_string() {
        let url = Url::parse("https://example.com/a/b?q=1").unwrap();
        let key = CacheKey::from_url(&url);
        assert_eq!(key.as_str(), "https://example.com/a/b?q=1");
    }

    #[test]
    fn test_equivalent_locators_share_a_key() {
        // Default port and bare host normalize during parsing
        let a = Url::parse("https://example.com:443/x").unwrap();
        let b = Url::parse("https://example.com/x").unwrap();
        assert_eq!(CacheKey::from_url(&a), CacheKey::from_url(&b));

        let c = Url::parse("https://example.com").unwrap();
        let d = Url::parse("https://example.com/").unwrap();
        assert_eq!(CacheKey::from_url(&c), CacheKey::from_url(&d));
    }

    #[test]
    fn test_distinct_locators_get_distinct_keys() {
        let a = Url::parse("https://example.com/x").unwrap();
        let b = Url::parse("https://example.com/y").unwrap();
        assert_ne!(CacheKey::from_url(&a), CacheKey::from_url(&b));
    }
}
