use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::{SeenRecord, SeenStore};

/// Plain text store, one posting per line.
///
/// No locking: two concurrent runs against the same file may both announce
/// a posting.
pub struct FileSeenStore {
    path: PathBuf,
}

impl FileSeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeenStore for FileSeenStore {
    async fn load(&self) -> Result<HashSet<String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No seen store yet, starting empty");
                return Ok(HashSet::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read seen store: {}", self.path.display())
                })
            }
        };

        let ids: HashSet<String> = content.lines().filter_map(SeenRecord::parse_id).collect();
        debug!(path = %self.path.display(), count = ids.len(), "Loaded seen ids");
        Ok(ids)
    }

    async fn append(&self, record: &SeenRecord) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open seen store: {}", self.path.display()))?;

        let line = format!("{}\n", record.to_line());
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to append to seen store: {}", self.path.display()))?;
        file.flush().await?;
        Ok(())
    }
}
