use listing_client::ListingError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WatchError>;

/// Failures that end a run. Notification failures never surface here.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Failed to fetch jobs: {0}")]
    Fetch(#[from] ListingError),

    #[error("Seen store error: {0}")]
    Store(String),
}

impl WatchError {
    pub(crate) fn store(err: anyhow::Error) -> Self {
        WatchError::Store(format!("{err:#}"))
    }
}
