use std::fmt;

use tracing::{error, info, warn};

use crate::dedup::{partition_new, Dedup};
use crate::error::{Result, WatchError};
use crate::extract::extract_postings;
use crate::fetch::Fetcher;
use crate::notify::{Delivery, NotifyBackend};
use crate::posting::Posting;
use crate::store::{SeenRecord, SeenStore};

/// Outcome of one completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Postings found on the page, seen or not.
    pub candidates: usize,
    /// Newly announced postings, in page order.
    pub new_postings: Vec<Posting>,
    pub notified: usize,
    pub notify_skipped: usize,
    pub notify_failures: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "candidates={} new={} notified={} skipped={} notify_failures={}",
            self.candidates,
            self.new_postings.len(),
            self.notified,
            self.notify_skipped,
            self.notify_failures,
        )
    }
}

/// One fetch, parse, dedup, notify, record pass over the search page.
pub struct Watcher {
    fetcher: Box<dyn Fetcher>,
    store: Box<dyn SeenStore>,
    notifier: Box<dyn NotifyBackend>,
    search_url: String,
}

impl Watcher {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        store: Box<dyn SeenStore>,
        notifier: Box<dyn NotifyBackend>,
        search_url: String,
    ) -> Self {
        Self {
            fetcher,
            store,
            notifier,
            search_url,
        }
    }

    /// Run the pipeline once.
    ///
    /// A fetch failure aborts before the store is read or written. Each new
    /// posting is notified and then recorded, in page order. The record is
    /// written whether or not the notification went out, so a failed alert
    /// is never repeated on the next run.
    pub async fn run(&self) -> Result<RunSummary> {
        info!(url = %self.search_url, "Fetching job listings");
        let html = match self.fetcher.fetch(&self.search_url).await {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, status = ?e.status(), "Failed to fetch jobs");
                return Err(WatchError::Fetch(e));
            }
        };

        let candidates = extract_postings(&html);
        info!(count = candidates.len(), "Extracted candidate postings");

        let seen = self.store.load().await.map_err(WatchError::store)?;
        let Dedup {
            fresh,
            already_seen,
        } = partition_new(candidates, &seen);

        let mut summary = RunSummary {
            candidates: fresh.len() + already_seen.len(),
            ..Default::default()
        };

        if fresh.is_empty() {
            info!("No new jobs found since last check.");
            return Ok(summary);
        }

        for posting in fresh {
            info!(id = %posting.id, company = %posting.organization, "NEW JOB DETECTED: {}", posting.title);

            match self.notifier.send(&posting).await {
                Ok(Delivery::Sent) => summary.notified += 1,
                Ok(Delivery::Skipped) => summary.notify_skipped += 1,
                Err(e) => {
                    warn!(error = %e, id = %posting.id, "Failed to send notification");
                    summary.notify_failures += 1;
                }
            }

            if let Err(e) = self.store.append(&SeenRecord::from(&posting)).await {
                error!(error = %e, id = %posting.id, "Failed to record posting");
                return Err(WatchError::store(e));
            }

            summary.new_postings.push(posting);
        }

        Ok(summary)
    }
}
