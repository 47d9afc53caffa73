pub mod core;
pub mod analysis;
pub mod index;
pub mod search;
pub mod protocol;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                       WORDLOG STRUCT ARCHITECTURE                    │
└──────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE ──────────────────────────────────┐
│                                                                      │
│  ┌────────────────────────────────────────────────────────────┐     │
│  │                        struct Store                         │     │
│  │  records: HashMap<RecordId, Record>  // primary mapping     │     │
│  │  index: InvertedIndex                // word ↔ record       │     │
│  │  queue: EvictionQueue                // first-insert FIFO   │     │
│  │  capacity: usize                     // max queued inserts  │     │
│  │  clock: Box<dyn Clock>               // timestamp source    │     │
│  │  cache: Option<SearchCache>          // LRU result cache    │     │
│  └────────────────────────────────────────────────────────────┘     │
│                                                                      │
│  ┌──────────────────┐  ┌──────────────────────────────────────┐     │
│  │ struct RecordId  │  │ struct Record                        │     │
│  │ • 0: i64         │  │ • id: RecordId                       │     │
│  └──────────────────┘  │ • content: String                    │     │
│                        │ • created_at: DateTime<Utc>          │     │
│  ┌──────────────────┐  │ • marked_for_deletion: bool          │     │
│  │ struct Config    │  └──────────────────────────────────────┘     │
│  │ • capacity       │                                               │
│  │ • cache_size     │  ┌──────────────────────────────────────┐     │
│  └──────────────────┘  │ struct SharedStore                   │     │
│                        │ • inner: Arc<RwLock<Store>>          │     │
│                        └──────────────────────────────────────┘     │
└──────────────────────────────────────────────────────────────────────┘

┌─────────────────────── INDEX / ANALYSIS ─────────────────────────────┐
│                                                                      │
│  ┌────────────────────────────────────────────────────────────┐     │
│  │                   struct InvertedIndex                      │     │
│  │  words: HashMap<String, Vec<RecordId>>  // append order     │     │
│  │  records: HashMap<RecordId, Vec<String>> // mirror image    │     │
│  │  tokenizer: Box<dyn Tokenizer>                              │     │
│  └────────────────────────────────────────────────────────────┘     │
│                                                                      │
│  ┌──────────────────────┐  ┌─────────────────────────────────┐      │
│  │ struct EvictionQueue │  │ trait Tokenizer                 │      │
│  │ • items: VecDeque    │  │ • tokenize()                    │      │
│  └──────────────────────┘  │ • SpaceTokenizer (single ' ')   │      │
│                            └─────────────────────────────────┘      │
└──────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── BOUNDARY ───────────────────────────────┐
│                                                                      │
│  ┌──────────────────────┐  ┌─────────────────────────────────┐      │
│  │ enum Command         │  │ run_session(input, output, diag)│      │
│  │ • Add { id, content }│  │ line 1: capacity                │      │
│  │ • Search{word, limit}│  │ ADD / SEARCH / END, CRLF out    │      │
│  │ • End                │  └─────────────────────────────────┘      │
│  └──────────────────────┘                                           │
└──────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── RELATIONSHIPS ───────────────────────────┐
│                                                                      │
│  Store ──owns──> InvertedIndex ──uses──> Tokenizer                   │
│    │                                                                 │
│    ├──owns──> EvictionQueue ──drives──> enforce_capacity()           │
│    │                                                                 │
│    ├──owns──> SearchCache ──cleared_by──> upsert()                   │
│    │                                                                 │
│    └──asks──> Clock ──for──> Record.created_at                       │
│                                                                      │
│  run_session ──parses──> Command ──calls──> Store::upsert/search     │
│                                                                      │
└──────────────────────────────────────────────────────────────────────┘
*/
