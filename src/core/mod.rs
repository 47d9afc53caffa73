pub mod types;
pub mod error;
pub mod config;
pub mod clock;
pub mod store;
pub mod shared;
pub mod stats;
