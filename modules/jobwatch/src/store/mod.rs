//! Durable record of postings that have already been announced.
//!
//! The store is append-only. Each announced posting adds one line of the form
//! `<id> | <title> | <url>`, and loading returns the set of ids ever written.

mod file;
mod memory;

pub use file::FileSeenStore;
pub use memory::MemorySeenStore;

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::posting::Posting;

const FIELD_DELIMITER: char = '|';

/// One persisted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRecord {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&Posting> for SeenRecord {
    fn from(posting: &Posting) -> Self {
        Self {
            id: posting.id.clone(),
            title: posting.title.clone(),
            url: posting.url.clone(),
        }
    }
}

impl SeenRecord {
    /// Render as a store line, without the trailing newline.
    ///
    /// Delimiters and line breaks inside the title are flattened so the line
    /// always splits back into three fields.
    pub fn to_line(&self) -> String {
        let title: String = self
            .title
            .chars()
            .map(|c| match c {
                FIELD_DELIMITER => '/',
                '\n' | '\r' => ' ',
                other => other,
            })
            .collect();
        format!("{} | {} | {}", self.id, title, self.url)
    }

    /// Read the id back out of a stored line.
    ///
    /// Lines written by the id-only format have no delimiter and are taken
    /// whole. Blank lines and lines with an empty first field carry no id.
    pub fn parse_id(line: &str) -> Option<String> {
        let id = line.split(FIELD_DELIMITER).next().unwrap_or(line).trim();
        if id.is_empty() {
            return None;
        }
        Some(id.to_string())
    }
}

/// Persistence seam for the set of already-announced posting ids.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Every id recorded so far. An empty or missing store is an empty set.
    async fn load(&self) -> Result<HashSet<String>>;

    /// Durably record one posting.
    async fn append(&self, record: &SeenRecord) -> Result<()>;
}

/// Lets tests keep a handle on a store after handing it to the watcher.
#[async_trait]
impl<S: SeenStore + ?Sized> SeenStore for Arc<S> {
    async fn load(&self) -> Result<HashSet<String>> {
        (**self).load().await
    }

    async fn append(&self, record: &SeenRecord) -> Result<()> {
        (**self).append(record).await
    }
}
