use faq_core::{MatchResult, SourceTag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for /chat. Every field is optional.
#[derive(Debug, Default, PartialEq)]
pub struct ChatRequest {
    /// Free-text user message.
    pub text: Option<String>,
    /// Caller-chosen session key; defaults to the peer address.
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Field-by-field read of a JSON object.
    ///
    /// A body that is not a JSON object reads as `{}`; a field that is not a
    /// string reads as absent without discarding its siblings.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(bytes) else {
            return Self::default();
        };
        let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            text: field("text"),
            session_id: field("session_id"),
        }
    }
}

/// Response payload for /chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: SourceTag,
    pub score: f32,
}

impl From<MatchResult> for ChatResponse {
    fn from(r: MatchResult) -> Self {
        Self {
            reply: r.reply,
            source: r.source,
            score: r.score,
        }
    }
}
