use async_trait::async_trait;

use crate::posting::Posting;

/// Outcome of a notification attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No channel configured; nothing left the process.
    Skipped,
}

/// Pluggable notification backend for new postings.
#[async_trait]
pub trait NotifyBackend: Send + Sync {
    /// Announce a single new posting.
    async fn send(&self, posting: &Posting) -> anyhow::Result<Delivery>;
}
