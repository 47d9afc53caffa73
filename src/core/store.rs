use std::collections::HashMap;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::Config;
use crate::core::stats::StoreStats;
use crate::core::types::{Record, RecordId};
use crate::index::inverted::InvertedIndex;
use crate::index::queue::EvictionQueue;
use crate::search::cache::{SearchCache, SearchKey};

/// Bounded in-memory record store with full-text word lookup.
///
/// Owns the primary id → record mapping, the inverted index, and the
/// insertion-order eviction queue; every mutation brings all three in step
/// before returning, so callers never observe the index and the primary
/// mapping disagreeing.
pub struct Store {
    records: HashMap<RecordId, Record>,
    index: InvertedIndex,
    queue: EvictionQueue,
    capacity: usize,
    clock: Box<dyn Clock>,
    cache: Option<SearchCache>,
    evicted_count: u64,
}

impl Store {
    pub fn new(config: Config) -> Self {
        Store::with_clock(config, Box::new(SystemClock))
    }

    /// Builds a store with an injected timestamp source. Tests use this with
    /// a deterministic clock.
    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        Store {
            records: HashMap::new(),
            index: InvertedIndex::new(),
            queue: EvictionQueue::new(),
            capacity: config.capacity,
            clock,
            cache: SearchCache::with_capacity(config.cache_size),
            evicted_count: 0,
        }
    }

    /// Inserts `content` under `id`, or replaces the content of the existing
    /// record with that id.
    ///
    /// An update keeps the original creation timestamp and does not re-enter
    /// the eviction queue; only first-time inserts can push the store over
    /// capacity and trigger eviction of the oldest insert. Never fails.
    pub fn upsert(&mut self, id: RecordId, content: impl Into<String>) {
        let content = content.into();
        match self.records.get(&id).cloned() {
            None => {
                let record = Record::new(id, content, self.clock.now());
                self.index.update(&record, None);
                self.records.insert(id, record);
                self.queue.push(id);
            }
            Some(original) => {
                let mut revised = original.clone();
                revised.content = content;
                self.index.update(&revised, Some(&original));
                self.records.insert(id, revised);
            }
        }
        // Structurally a no-op on the update path, but the invariant is
        // checked unconditionally.
        self.enforce_capacity();
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Records whose content contains `word`, newest creation first, at most
    /// `limit` of them. `limit <= 0` and unknown words yield an empty result.
    pub fn search(&self, word: &str, limit: i64) -> Vec<Record> {
        if limit <= 0 {
            return Vec::new();
        }
        let key = SearchKey {
            word: word.to_string(),
            limit,
        };
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                return hit;
            }
        }

        // Candidates resolve newest-appended first; the sort below is stable,
        // so equal timestamps keep that order.
        let mut matches: Vec<Record> = self
            .index
            .lookup(word)
            .iter()
            .rev()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matches.truncate(limit as usize);

        if let Some(cache) = &self.cache {
            cache.put(key, matches.clone());
        }
        matches
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            record_count: self.records.len(),
            queue_len: self.queue.len(),
            capacity: self.capacity,
            distinct_words: self.index.distinct_words(),
            evicted_count: self.evicted_count,
            cache: self.cache.as_ref().map(SearchCache::stats),
        }
    }

    fn enforce_capacity(&mut self) {
        while self.queue.len() > self.capacity {
            let Some(oldest) = self.queue.pop() else {
                break;
            };
            self.delete(oldest);
        }
    }

    fn delete(&mut self, id: RecordId) {
        self.index.remove_all(id);
        self.records.remove(&id);
        self.evicted_count += 1;
    }
}
