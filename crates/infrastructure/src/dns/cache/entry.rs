use hickory_proto::rr::Record;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub records: Arc<[Record]>,
    /// TTL of the first record at insertion, 0 for an empty answer set.
    pub ttl: u32,
    /// Insertion time as a Unix timestamp (seconds).
    pub created_at_secs: u64,
}

impl CacheEntry {
    pub fn new(records: Vec<Record>, now_secs: u64) -> Self {
        let ttl = records.first().map_or(0, Record::ttl);
        Self {
            records: records.into(),
            ttl,
            created_at_secs: now_secs,
        }
    }

    /// Entries with a TTL of 0 or 1 never expire.
    #[inline(always)]
    pub fn is_expired_at_secs(&self, now_secs: u64) -> bool {
        self.ttl > 1 && self.created_at_secs + u64::from(self.ttl) < now_secs
    }
}
