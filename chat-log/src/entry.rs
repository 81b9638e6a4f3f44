//! The persisted record shape.

use serde::{Deserialize, Serialize};

/// One resolved chat exchange.
///
/// Field names on disk are `session` and `ts`, matching existing log files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "session")]
    pub session_id: String,
    pub query: String,
    pub reply: String,
    /// `ai` | `rule` | `fallback` | `error`
    pub source: String,
    pub score: f32,
    /// Unix time in seconds, fractional.
    #[serde(rename = "ts")]
    pub timestamp: f64,
}

impl LogEntry {
    /// Builds an entry stamped with the current UTC time.
    pub fn now(
        session_id: impl Into<String>,
        query: impl Into<String>,
        reply: impl Into<String>,
        source: impl Into<String>,
        score: f32,
    ) -> Self {
        let micros = chrono::Utc::now().timestamp_micros();
        Self {
            session_id: session_id.into(),
            query: query.into(),
            reply: reply.into(),
            source: source.into(),
            score,
            timestamp: micros as f64 / 1_000_000.0,
        }
    }
}
