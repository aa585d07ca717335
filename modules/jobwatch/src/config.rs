use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use listing_client::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Salesforce Developer roles, fixed geo id, posted in the last ~5.5 hours,
/// newest first.
pub const DEFAULT_SEARCH_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search?keywords=Salesforce%20Developer&geoId=90009650&f_TPR=r20000&sortBy=DD";

pub const DEFAULT_STORE_PATH: &str = "seen_jobs.txt";

pub const DEFAULT_JOB_LABEL: &str = "Salesforce";

/// Run configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct JobwatchConfig {
    pub search_url: String,
    pub user_agent: String,
    pub store_path: PathBuf,
    pub request_timeout: Duration,
    /// Used in the notification header, e.g. "New Salesforce Job!".
    pub job_label: String,

    // Secrets
    pub slack_webhook: Option<String>,
}

impl Default for JobwatchConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            request_timeout: DEFAULT_TIMEOUT,
            job_label: DEFAULT_JOB_LABEL.to_string(),
            slack_webhook: None,
        }
    }
}

impl JobwatchConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let request_timeout = match get("JOBWATCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("JOBWATCH_TIMEOUT_SECS must be a number, got {raw:?}"))?;
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            search_url: get("JOBWATCH_SEARCH_URL").unwrap_or(defaults.search_url),
            user_agent: get("JOBWATCH_USER_AGENT").unwrap_or(defaults.user_agent),
            store_path: get("JOBWATCH_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            request_timeout,
            job_label: get("JOBWATCH_JOB_LABEL").unwrap_or(defaults.job_label),
            slack_webhook: get("SLACK_WEBHOOK"),
        })
    }

    fn log_keys(&self) {
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let head: String = v.chars().take(12).collect();
                    format!("{head}...({} chars)", v.len())
                }
                None => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  JOBWATCH_SEARCH_URL: {}", self.search_url);
        tracing::info!("  JOBWATCH_STORE_PATH: {}", self.store_path.display());
        tracing::info!("  JOBWATCH_TIMEOUT_SECS: {}", self.request_timeout.as_secs());
        tracing::info!("  SLACK_WEBHOOK: {}", preview_opt(&self.slack_webhook));
    }
}
