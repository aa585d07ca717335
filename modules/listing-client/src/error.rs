use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListingError>;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search page returned status {status}")]
    Status { status: u16, body: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ListingError {
    fn from(err: reqwest::Error) -> Self {
        ListingError::Network(err.to_string())
    }
}

impl ListingError {
    /// HTTP status of a rejected response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ListingError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
