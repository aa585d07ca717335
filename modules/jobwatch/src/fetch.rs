use async_trait::async_trait;
use listing_client::{ListingClient, ListingError};

/// Source of raw search result pages.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ListingError>;
}

#[async_trait]
impl Fetcher for ListingClient {
    async fn fetch(&self, url: &str) -> Result<String, ListingError> {
        self.search_page(url).await
    }
}
