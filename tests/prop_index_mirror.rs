//! Property tests for the word ↔ record mirror invariant: after any sequence
//! of upserts, an id is listed under a word iff that word is listed under the
//! id, and search agrees with the primary mapping.

use proptest::prelude::*;

use wordlog::core::clock::FixedClock;
use wordlog::core::config::Config;
use wordlog::core::store::Store;
use wordlog::core::types::RecordId;

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "epsilon"])
        .prop_map(str::to_string)
}

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..5).prop_map(|words| words.join(" "))
}

fn ops() -> impl Strategy<Value = Vec<(i64, String)>> {
    prop::collection::vec((0i64..8, content()), 1..40)
}

fn assert_mirrored(store: &Store) {
    let index = store.index();
    for word in index.words() {
        for &id in index.lookup(word) {
            assert!(
                index.words_of(id).iter().any(|w| w == word),
                "{:?} listed under {:?} but not mirrored",
                id,
                word
            );
        }
    }
    for id in index.record_ids() {
        for word in index.words_of(id) {
            assert!(
                index.lookup(word).contains(&id),
                "{:?} listed under {:?} but not mirrored",
                word,
                id
            );
        }
    }
}

proptest! {
    #[test]
    fn mirror_invariant_holds_under_arbitrary_upserts(ops in ops(), capacity in 0usize..6) {
        let mut store = Store::with_clock(
            Config { capacity, cache_size: 0 },
            Box::new(FixedClock::new()),
        );
        for (id, content) in ops {
            store.upsert(RecordId(id), content);
            assert_mirrored(&store);

            let stats = store.stats();
            prop_assert!(stats.queue_len <= capacity);
            prop_assert_eq!(stats.record_count, stats.queue_len);
        }
    }

    #[test]
    fn indexed_words_resolve_to_live_records(ops in ops()) {
        let mut store = Store::with_clock(
            Config { capacity: 4, cache_size: 0 },
            Box::new(FixedClock::new()),
        );
        for (id, content) in ops {
            store.upsert(RecordId(id), content);
        }

        let words: Vec<String> = store.index().words().map(str::to_string).collect();
        for word in words {
            for record in store.search(&word, i64::MAX) {
                let live = store.get(record.id).expect("search returned an evicted record");
                prop_assert!(live.content.split(' ').any(|t| t == word));
            }
        }
    }
}
