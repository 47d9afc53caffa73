#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of inserted records kept live before the oldest
    /// insert is evicted.
    pub capacity: usize,
    /// Search-result cache size in entries. Zero disables caching.
    pub cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: 1024,
            cache_size: 256,
        }
    }
}

impl Config {
    pub fn with_capacity(capacity: usize) -> Self {
        Config {
            capacity,
            ..Config::default()
        }
    }
}
