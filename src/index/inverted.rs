use std::collections::{HashMap, HashSet};

use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::core::types::{Record, RecordId};

/// Bidirectional word ↔ record index.
///
/// `words` and `records` are maintained as mirror images: a record id appears
/// in a word's posting list iff that word appears in the id's word list.
/// Posting lists keep append order and contain no duplicates.
pub struct InvertedIndex {
    words: HashMap<String, Vec<RecordId>>,
    records: HashMap<RecordId, Vec<String>>,
    tokenizer: Box<dyn Tokenizer>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::with_tokenizer(Box::new(SpaceTokenizer))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        InvertedIndex {
            words: HashMap::new(),
            records: HashMap::new(),
            tokenizer,
        }
    }

    /// Adds mappings for every token of `current` in both directions,
    /// idempotently. When `previous` is given, tokens of `previous` that are
    /// absent from `current` are removed for that id; tokens present in both
    /// revisions are left untouched.
    pub fn update(&mut self, current: &Record, previous: Option<&Record>) {
        self.insert_mappings(current);
        if let Some(previous) = previous {
            self.remove_stale_mappings(previous, current);
        }
    }

    /// Ids mapped to `word`, in index-append order. Empty for unknown words.
    pub fn lookup(&self, word: &str) -> &[RecordId] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Purges `id` from every posting list it appears in, then drops its own
    /// word list. No-op for ids the index has never seen.
    pub fn remove_all(&mut self, id: RecordId) {
        let Some(words) = self.records.remove(&id) else {
            return;
        };
        for word in words {
            self.remove_id_from_word(&word, id);
        }
    }

    /// Words mapped to `id`, in index-append order.
    pub fn words_of(&self, id: RecordId) -> &[String] {
        self.records.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn record_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.keys().copied()
    }

    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }

    fn insert_mappings(&mut self, record: &Record) {
        for token in self.tokenizer.tokenize(&record.content) {
            let ids = self.words.entry(token.clone()).or_default();
            if !ids.contains(&record.id) {
                ids.push(record.id);
            }
            let words = self.records.entry(record.id).or_default();
            if !words.contains(&token) {
                words.push(token);
            }
        }
    }

    fn remove_stale_mappings(&mut self, previous: &Record, current: &Record) {
        let kept: HashSet<String> = self.tokenizer.tokenize(&current.content).into_iter().collect();
        let stale: Vec<String> = self
            .tokenizer
            .tokenize(&previous.content)
            .into_iter()
            .filter(|token| !kept.contains(token))
            .collect();
        if stale.is_empty() {
            return;
        }

        for word in &stale {
            self.remove_id_from_word(word, previous.id);
        }
        if let Some(words) = self.records.get_mut(&previous.id) {
            words.retain(|word| !stale.contains(word));
        }
    }

    fn remove_id_from_word(&mut self, word: &str, id: RecordId) {
        if let Some(ids) = self.words.get_mut(word) {
            ids.retain(|&existing| existing != id);
            if ids.is_empty() {
                self.words.remove(word);
            }
        }
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        InvertedIndex::new()
    }
}
