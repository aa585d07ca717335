use async_trait::async_trait;
use tracing::warn;

use super::backend::{Delivery, NotifyBackend};
use crate::posting::Posting;

/// Backend used when no webhook is configured.
pub struct NoopBackend;

#[async_trait]
impl NotifyBackend for NoopBackend {
    async fn send(&self, posting: &Posting) -> anyhow::Result<Delivery> {
        warn!(id = %posting.id, "Skipping Slack: SLACK_WEBHOOK not set");
        Ok(Delivery::Skipped)
    }
}
