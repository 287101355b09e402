//! Cache entry - the persisted unit of the store
//!
//! A `CacheEntry` is what the fetch/decode pipeline hands us after a
//! successful fetch: the payload bytes, the MIME type, timestamps, and an
//! optional time-to-live. The store persists and returns these verbatim;
//! it never inspects the payload or acts on the TTL.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use url::Url;

/// A cached resource: payload plus the metadata needed to reuse it.
///
/// Timestamps persist with whole-second precision; sub-second components
/// truncate on store. `time_to_live: None` means "no expiry recorded" and
/// is a distinct state from `Some(Duration::ZERO)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Canonical locator of the resource
    pub url: Url,
    /// Opaque payload bytes
    pub data: Vec<u8>,
    /// MIME type of the payload, e.g. `image/png`
    pub content_type: String,
    /// Optional expiry duration, persisted but not enforced here
    pub time_to_live: Option<Duration>,
    /// When the resource was first cached
    pub created_at: SystemTime,
    /// When the resource was last written
    pub modified_at: SystemTime,
}

impl CacheEntry {
    /// Create an entry timestamped now, with no TTL.
    pub fn new(url: Url, data: Vec<u8>, content_type: impl Into<String>) -> Self {
        let now = truncate_to_seconds(SystemTime::now());
        Self {
            url,
            data,
            content_type: content_type.into(),
            time_to_live: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// Set a time-to-live on the entry.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }
}

/// Whole seconds since the Unix epoch, as stored in the `created_at` and
/// `updated_at` columns. Times before the epoch clamp to zero.
pub(crate) fn unix_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Inverse of [`unix_seconds`]: rebuild a `SystemTime` from stored seconds.
pub(crate) fn from_unix_seconds(secs: i64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}

fn truncate_to_seconds(time: SystemTime) -> SystemTime {
    from_unix_seconds(unix_seconds(time))
}
