//! Unified error type for the faq-core crate.

use thiserror::Error;

/// Errors produced while building the matching core.
///
/// Request handling itself never fails; these surface at startup only.
#[derive(Debug, Error)]
pub enum FaqError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Corpus ──────────────────────────────────────────────────────────────
    /// Two canonical questions are equal ignoring case.
    #[error("duplicate question in corpus: '{0}'")]
    DuplicateQuestion(String),

    /// A canonical question is blank after trimming.
    #[error("empty question at corpus position {0}")]
    EmptyQuestion(usize),

    // ── I/O & serialization ─────────────────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Tokenizer ───────────────────────────────────────────────────────────
    #[error("tokenizer pattern error: {0}")]
    Tokenizer(#[from] regex::Error),
}
