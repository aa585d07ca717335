//! Shared fakes for pipeline tests: a scripted fetcher, a recording
//! notifier, and page fixtures.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobwatch::fetch::Fetcher;
use jobwatch::notify::{Delivery, NotifyBackend};
use jobwatch::Posting;
use listing_client::ListingError;

pub const SEARCH_URL: &str = "https://x.test/jobs-guest/search?keywords=Salesforce%20Developer&sortBy=DD";

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Script {
    Page(String),
    Status(u16),
    Unreachable,
}

/// Returns the same scripted response on every call and counts calls.
#[derive(Clone)]
pub struct ScriptedFetcher {
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl ScriptedFetcher {
    pub fn page(html: impl Into<String>) -> Self {
        Self::with(Script::Page(html.into()))
    }

    pub fn status(status: u16) -> Self {
        Self::with(Script::Status(status))
    }

    pub fn unreachable() -> Self {
        Self::with(Script::Unreachable)
    }

    fn with(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, ListingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Page(html) => Ok(html.clone()),
            Script::Status(status) => Err(ListingError::Status {
                status: *status,
                body: String::new(),
            }),
            Script::Unreachable => Err(ListingError::Network("dns error: no such host".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Records every posting it is asked to send. Optionally fails each send.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Posting>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> Vec<Posting> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifyBackend for RecordingNotifier {
    async fn send(&self, posting: &Posting) -> anyhow::Result<Delivery> {
        self.sent.lock().unwrap().push(posting.clone());
        if self.fail {
            anyhow::bail!("Slack webhook returned 500 Internal Server Error");
        }
        Ok(Delivery::Sent)
    }
}

// ---------------------------------------------------------------------------
// Page fixtures
// ---------------------------------------------------------------------------

pub fn card(title: &str, company: &str, href: &str) -> String {
    format!(
        r#"<li>
  <div class="base-card relative w-full base-search-card job-search-card">
    <a class="base-card__full-link absolute top-0 right-0 bottom-0 left-0 p-0 z-[2]" href="{href}">
      <span class="sr-only">{title}</span>
    </a>
    <div class="base-search-card__info">
      <h3 class="base-search-card__title">
        {title}
      </h3>
      <h4 class="base-search-card__subtitle">
        <a class="hidden-nested-link" href="https://x.test/company/c">
          {company}
        </a>
      </h4>
    </div>
  </div>
</li>"#
    )
}

pub fn page(cards: &[String]) -> String {
    format!("<!DOCTYPE html><html><body><ul>{}</ul></body></html>", cards.concat())
}

pub fn acme_page() -> String {
    page(&[card(
        "Salesforce Developer",
        "Acme Corp",
        "https://x.test/jobs/view/salesforce-developer-at-acme-1234?pos=1",
    )])
}
