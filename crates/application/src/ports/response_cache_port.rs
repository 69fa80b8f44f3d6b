/// Port for the cache operations needed outside the packet path.
pub trait ResponseCachePort: Send + Sync {
    fn cache_size(&self) -> usize;

    /// Drops every entry.
    fn clear_all(&self);
}
