mod clock;
mod entry;
mod key;

pub use clock::unix_now_secs;
pub use entry::CacheEntry;
pub use key::question_fingerprint;

use dashmap::DashMap;
use hickory_proto::rr::Record;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::debug;
use xdns_application::ports::ResponseCachePort;
use xdns_domain::{QuestionFingerprint, RoutePath};

/// Answer cache for one routing path.
///
/// Expired entries are evicted lazily, only when they are looked up; there is
/// no background sweep and no size bound.
pub struct ResponseCache {
    path: RoutePath,
    entries: DashMap<QuestionFingerprint, CacheEntry, FxBuildHasher>,
}

impl ResponseCache {
    pub fn new(path: RoutePath) -> Self {
        Self {
            path,
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, fingerprint: &QuestionFingerprint) -> Option<Arc<[Record]>> {
        self.lookup_at(fingerprint, unix_now_secs())
    }

    pub fn lookup_at(
        &self,
        fingerprint: &QuestionFingerprint,
        now_secs: u64,
    ) -> Option<Arc<[Record]>> {
        {
            let entry = self.entries.get(fingerprint)?;
            if !entry.is_expired_at_secs(now_secs) {
                return Some(Arc::clone(&entry.records));
            }
        }

        // Re-checked under the write lock so a concurrent fresh store survives.
        let evicted = self
            .entries
            .remove_if(fingerprint, |_, entry| entry.is_expired_at_secs(now_secs));
        if evicted.is_some() {
            debug!(path = %self.path, question = %fingerprint, "Evicted expired cache entry");
        }
        None
    }

    pub fn store(&self, fingerprint: QuestionFingerprint, records: Vec<Record>) {
        self.store_at(fingerprint, records, unix_now_secs());
    }

    pub fn store_at(&self, fingerprint: QuestionFingerprint, records: Vec<Record>, now_secs: u64) {
        let entry = CacheEntry::new(records, now_secs);
        debug!(
            path = %self.path,
            question = %fingerprint,
            answers = entry.records.len(),
            ttl = entry.ttl,
            "Cache store"
        );
        self.entries.insert(fingerprint, entry);
    }

    pub fn remove(&self, fingerprint: &QuestionFingerprint) -> bool {
        self.entries.remove(fingerprint).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl ResponseCachePort for ResponseCache {
    fn cache_size(&self) -> usize {
        self.len()
    }

    fn clear_all(&self) {
        self.clear();
    }
}
