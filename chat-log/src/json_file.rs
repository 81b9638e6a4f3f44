//! Whole-file JSON array store.
//!
//! Every append reads the entire file, pushes the entry in memory and writes
//! the entire file back. A single async mutex scopes that read-modify-write so
//! concurrent requests never lose each other's entries.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{ChatLogError, ChatLogStore, LogEntry, StoreFuture};

/// Log store backed by a single JSON file (`[LogEntry, ...]`).
pub struct JsonFileLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole collection in file order.
    ///
    /// Absent, empty, unreadable or malformed files all yield an empty list.
    pub async fn load_all(&self) -> Vec<LogEntry> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    target: "chat_log::json_file",
                    path = %self.path.display(),
                    error = %e,
                    "log store unreadable, treating as empty"
                );
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        match serde_json::from_slice::<Vec<LogEntry>>(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    target: "chat_log::json_file",
                    path = %self.path.display(),
                    error = %e,
                    "log store malformed, treating as empty"
                );
                Vec::new()
            }
        }
    }

    async fn append_locked(&self, entry: LogEntry) -> Result<(), ChatLogError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_all().await;
        entries.push(entry);

        let body = serde_json::to_vec_pretty(&entries)?;
        tokio::fs::write(&self.path, body).await?;

        debug!(
            target: "chat_log::json_file",
            path = %self.path.display(),
            total = entries.len(),
            "log entry appended"
        );
        Ok(())
    }
}

impl ChatLogStore for JsonFileLogStore {
    fn append<'a>(&'a self, entry: LogEntry) -> StoreFuture<'a, Result<(), ChatLogError>> {
        Box::pin(self.append_locked(entry))
    }

    fn recent<'a>(&'a self, limit: usize) -> StoreFuture<'a, Vec<LogEntry>> {
        Box::pin(async move {
            // never observe a half-written file
            let _guard = self.write_lock.lock().await;
            let mut entries = self.load_all().await;
            entries.reverse();
            entries.truncate(limit);
            entries
        })
    }
}
