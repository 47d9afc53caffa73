use crate::search::cache::CacheStats;

/// Point-in-time counters for a store.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub record_count: usize,
    pub queue_len: usize,
    pub capacity: usize,
    pub distinct_words: usize,
    pub evicted_count: u64,
    /// `None` when the search cache is disabled.
    pub cache: Option<CacheStats>,
}
