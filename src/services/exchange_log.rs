// src/services/exchange_log.rs
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Separator line between audit entries: 50 dashes.
const SEPARATOR: &str = "--------------------------------------------------";

/// Append-only audit log of request/reply pairs.
///
/// The file only grows; entries are never rewritten or rotated and there is
/// no read path. A mutex serializes appends so one entry's three lines stay
/// contiguous when requests complete concurrently.
#[derive(Clone)]
pub struct ExchangeLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ExchangeLog {
    /// Set up the log at `path`, pre-creating its parent directory.
    ///
    /// The file itself is created by the first append.
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one completed exchange as a three-line block.
    pub async fn append(&self, message: &str, reply: &str) -> io::Result<()> {
        // One buffered write per block.
        let entry = format!("User message: {message}\nAI response: {reply}\n{SEPARATOR}\n");

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.as_bytes()).await?;
        // write_all only queues the bytes; flush drives the write to
        // completion and surfaces its error before the lock releases.
        file.flush().await?;
        Ok(())
    }
}
