//! Resolve-then-record: one reply and exactly one log entry per request.

use std::sync::Arc;

use chat_log::{ChatLogStore, LogEntry};
use tracing::{debug, error};

use crate::resolver::{MatchResult, ReplyResolver};

/// Session id used when the caller supplies none and has no peer address.
pub const ANONYMOUS_SESSION: &str = "anonymous";

/// Pairs the shared resolver with the conversation log sink.
#[derive(Clone)]
pub struct Conversation {
    resolver: Arc<ReplyResolver>,
    log: Arc<dyn ChatLogStore>,
}

impl Conversation {
    pub fn new(resolver: Arc<ReplyResolver>, log: Arc<dyn ChatLogStore>) -> Self {
        Self { resolver, log }
    }

    pub fn resolver(&self) -> &ReplyResolver {
        &self.resolver
    }

    pub fn log(&self) -> &dyn ChatLogStore {
        self.log.as_ref()
    }

    /// Resolves `text`, then appends the exchange to the log.
    ///
    /// A failing sink is reported and otherwise ignored; the reply is always
    /// returned.
    pub async fn reply(&self, session_id: &str, text: &str) -> MatchResult {
        let query = text.trim();
        let result = self.resolver.resolve(query);

        let entry = LogEntry::now(
            session_id,
            query,
            result.reply.as_str(),
            result.source.as_str(),
            result.score,
        );

        match self.log.append(entry).await {
            Ok(()) => debug!(
                target: "faq_core::conversation",
                session = session_id,
                source = result.source.as_str(),
                score = result.score,
                "exchange recorded"
            ),
            Err(e) => error!(
                target: "faq_core::conversation",
                session = session_id,
                error = %e,
                "failed to write chat log"
            ),
        }

        result
    }
}
