use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use super::backend::{Delivery, NotifyBackend};
use crate::posting::Posting;

/// Slack incoming webhook notification backend.
pub struct SlackWebhook {
    webhook_url: String,
    job_label: String,
    http: reqwest::Client,
}

impl SlackWebhook {
    pub fn new(webhook_url: String, job_label: &str) -> Self {
        Self::with_client(webhook_url, job_label, reqwest::Client::new())
    }

    pub fn with_client(webhook_url: String, job_label: &str, http: reqwest::Client) -> Self {
        Self {
            webhook_url,
            job_label: job_label.to_string(),
            http,
        }
    }

    fn message(&self, posting: &Posting) -> String {
        format!(
            ":rocket: *New {} Job!*\n\
             *Role:* {}\n\
             *Company:* {}\n\
             *Link:* {}",
            self.job_label, posting.title, posting.organization, posting.url,
        )
    }

    async fn post(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Slack webhook returned non-success");
            anyhow::bail!("Slack webhook returned {status}");
        }

        info!(status = %status, "Slack response");
        Ok(())
    }
}

#[async_trait]
impl NotifyBackend for SlackWebhook {
    async fn send(&self, posting: &Posting) -> anyhow::Result<Delivery> {
        let payload = json!({ "text": self.message(posting) });
        self.post(payload).await?;
        Ok(Delivery::Sent)
    }
}
