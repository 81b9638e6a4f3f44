//! Conversation log: an append-only record of resolved chat exchanges.
//!
//! The crate exposes:
//! - [`LogEntry`]: one durable record per request
//! - [`ChatLogStore`]: the sink interface the chat core depends on
//! - [`JsonFileLogStore`]: whole-file JSON array, rewritten on every append
//! - [`InMemoryLogStore`]: process-local sink, handy for tests and dry runs
//!
//! Reads never fail: a missing or unreadable store is reported as "no logs yet".

mod entry;
mod errors;
mod json_file;
mod memory;

pub use entry::LogEntry;
pub use errors::ChatLogError;
pub use json_file::JsonFileLogStore;
pub use memory::InMemoryLogStore;

use std::{future::Future, pin::Pin};

/// Boxed future returned by [`ChatLogStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Durable sink for chat exchanges.
///
/// Implement this trait to plug in another medium (database, queue, ...).
/// The chat core only appends; `recent` serves the admin view.
pub trait ChatLogStore: Send + Sync {
    /// Appends one entry. Implementations serialize concurrent appends.
    fn append<'a>(&'a self, entry: LogEntry) -> StoreFuture<'a, Result<(), ChatLogError>>;

    /// Returns up to `limit` entries, most recent first.
    ///
    /// Storage problems degrade to an empty list.
    fn recent<'a>(&'a self, limit: usize) -> StoreFuture<'a, Vec<LogEntry>>;
}
