pub mod error;

pub use error::{ListingError, Result};

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

/// Desktop Chrome identification. The guest search endpoint rejects
/// requests that look like bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ListingClient {
    client: reqwest::Client,
    user_agent: String,
}

impl ListingClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ListingError::Client(e.to_string()))?;

        Ok(Self::with_client(client, user_agent))
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, user_agent: &str) -> Self {
        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fetch the raw HTML of a search results page.
    ///
    /// Only a 200 response counts as success. Any other status is returned as
    /// `ListingError::Status` with the response body attached for diagnostics.
    pub async fn search_page(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ListingError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "Fetched search page");
        Ok(body)
    }
}
