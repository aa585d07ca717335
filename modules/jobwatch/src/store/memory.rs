use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::{SeenRecord, SeenStore};

/// In-memory store for tests. Keeps rendered lines so assertions can check
/// exactly what a file store would have written.
#[derive(Default)]
pub struct MemorySeenStore {
    lines: Mutex<Vec<String>>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing store lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SeenStore for MemorySeenStore {
    async fn load(&self) -> Result<HashSet<String>> {
        Ok(self
            .lines()
            .iter()
            .filter_map(|line| SeenRecord::parse_id(line))
            .collect())
    }

    async fn append(&self, record: &SeenRecord) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.to_line());
        Ok(())
    }
}
