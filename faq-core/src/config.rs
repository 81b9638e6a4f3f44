//! Configuration layer: matching knobs read from environment variables.

use std::path::PathBuf;

use crate::errors::FaqError;

/// Reply used when neither the index nor a rule is confident.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "Sorry, I couldn't find an answer. Would you like me to forward this to an admin?";

/// Cosine similarity a match must strictly exceed.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.35;

/// Runtime settings for the matching core.
#[derive(Debug, Clone)]
pub struct FaqConfig {
    /// Similarity cutoff, strict `>` comparison.
    pub match_threshold: f32,
    /// Ultimate fallback text.
    pub fallback_reply: String,
    /// Optional JSON file replacing the built-in corpus.
    pub corpus_path: Option<PathBuf>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
            corpus_path: None,
        }
    }
}

impl FaqConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `MATCH_THRESHOLD` (default: 0.35, must lie in [0, 1])
    /// - `FALLBACK_REPLY` (default: [`DEFAULT_FALLBACK_REPLY`])
    /// - `STATIC_QA_PATH` (optional JSON `[{question, answer}]`)
    pub fn from_env() -> Result<Self, FaqError> {
        let match_threshold = read_f32_env("MATCH_THRESHOLD")?.unwrap_or(DEFAULT_MATCH_THRESHOLD);

        let fallback_reply = fallback_reply_or_default(std::env::var("FALLBACK_REPLY").ok());

        let corpus_path = std::env::var("STATIC_QA_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let cfg = Self {
            match_threshold,
            fallback_reply,
            corpus_path,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), FaqError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(FaqError::InvalidConfig(format!(
                "MATCH_THRESHOLD must be within [0, 1], got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }
}

/// A set `FALLBACK_REPLY` is used as-is, even when empty.
fn fallback_reply_or_default(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_FALLBACK_REPLY.to_string())
}

/// Read an optional `f32` from env; unset means `None`.
fn read_f32_env(key: &str) -> Result<Option<f32>, FaqError> {
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<f32>()
            .map(Some)
            .map_err(|_| FaqError::EnvParse {
                key: key.into(),
                value: v,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let cfg = FaqConfig::default();
        assert_eq!(cfg.match_threshold, 0.35);
        assert!(cfg.fallback_reply.starts_with("Sorry"));
        assert!(cfg.corpus_path.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn configured_fallback_reply_is_taken_verbatim() {
        assert_eq!(fallback_reply_or_default(None), DEFAULT_FALLBACK_REPLY);
        assert_eq!(fallback_reply_or_default(Some(String::new())), "");
        assert_eq!(fallback_reply_or_default(Some("  ".into())), "  ");
        assert_eq!(fallback_reply_or_default(Some("Ask the office.".into())), "Ask the office.");
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let cfg = FaqConfig {
            match_threshold: 1.5,
            ..FaqConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FaqError::InvalidConfig(_))));
    }
}
