//! In-memory log sink for tests and ephemeral runs.

use std::sync::Mutex;

use crate::{ChatLogError, ChatLogStore, LogEntry, StoreFuture};

/// Process-local log sink. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryLogStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in append order.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        // a poisoned lock still holds a consistent Vec
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

impl ChatLogStore for InMemoryLogStore {
    fn append<'a>(&'a self, entry: LogEntry) -> StoreFuture<'a, Result<(), ChatLogError>> {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(entry);
        Box::pin(std::future::ready(Ok::<(), ChatLogError>(())))
    }

    fn recent<'a>(&'a self, limit: usize) -> StoreFuture<'a, Vec<LogEntry>> {
        let mut out = self.snapshot();
        out.reverse();
        out.truncate(limit);
        Box::pin(std::future::ready(out))
    }
}
