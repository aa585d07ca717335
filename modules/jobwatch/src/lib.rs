pub mod config;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod posting;
pub mod store;
pub mod watcher;

pub use config::JobwatchConfig;
pub use error::{Result, WatchError};
pub use posting::Posting;
pub use watcher::{RunSummary, Watcher};
