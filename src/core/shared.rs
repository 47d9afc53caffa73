use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::config::Config;
use crate::core::stats::StoreStats;
use crate::core::store::Store;
use crate::core::types::{Record, RecordId};

/// Thread-safe handle over a [`Store`].
///
/// All three owned structures mutate under one exclusive lock, so readers
/// never observe a half-applied upsert; searches share the read lock with
/// each other.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(config: Config) -> Self {
        SharedStore::from_store(Store::new(config))
    }

    pub fn from_store(store: Store) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn upsert(&self, id: RecordId, content: impl Into<String>) {
        self.inner.write().upsert(id, content);
    }

    pub fn search(&self, word: &str, limit: i64) -> Vec<Record> {
        self.inner.read().search(word, limit)
    }

    pub fn stats(&self) -> StoreStats {
        self.inner.read().stats()
    }
}
