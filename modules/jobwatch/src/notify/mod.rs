pub mod backend;
pub mod noop;
pub mod slack;

pub use backend::{Delivery, NotifyBackend};
pub use noop::NoopBackend;
pub use slack::SlackWebhook;

use tracing::info;

/// Pick the backend for this run: Slack when a webhook is configured,
/// otherwise a no-op that only logs.
pub fn build_backend(webhook_url: Option<String>, job_label: &str) -> Box<dyn NotifyBackend> {
    match webhook_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => {
            info!("Slack notifications enabled");
            Box::new(SlackWebhook::new(url, job_label))
        }
        None => {
            info!("No SLACK_WEBHOOK set, notifications disabled");
            Box::new(NoopBackend)
        }
    }
}
