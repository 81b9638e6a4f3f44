//! Reply Resolver: validate → index match → keyword rules → default fallback.
//!
//! Single pass per request; the first stage that produces an answer ends it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::FaqConfig,
    corpus::Corpus,
    errors::FaqError,
    index::TfidfIndex,
    matcher::Matcher,
    rules::RuleEngine,
};

/// Reply for empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "Please type a message.";

/// Which stage produced the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Ai,
    Rule,
    Fallback,
    Error,
}

impl SourceTag {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::Ai => "ai",
            SourceTag::Rule => "rule",
            SourceTag::Fallback => "fallback",
            SourceTag::Error => "error",
        }
    }
}

/// Final answer for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub reply: String,
    pub source: SourceTag,
    /// Confidence in [0, 1].
    pub score: f32,
}

/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ReplyResolver {
    corpus: Corpus,
    index: TfidfIndex,
    matcher: Matcher,
    rules: RuleEngine,
    fallback_reply: String,
}

impl ReplyResolver {
    /// Builds the index over `corpus`. Blocking, call once before serving.
    pub fn new(corpus: Corpus, rules: RuleEngine, cfg: &FaqConfig) -> Result<Self, FaqError> {
        cfg.validate()?;
        let index = TfidfIndex::from_corpus(&corpus)?;
        Ok(Self {
            corpus,
            index,
            matcher: Matcher::new(cfg.match_threshold),
            rules,
            fallback_reply: cfg.fallback_reply.clone(),
        })
    }

    /// Loads the configured corpus and the default rule set.
    pub fn from_config(cfg: &FaqConfig) -> Result<Self, FaqError> {
        Self::new(Corpus::load(cfg)?, RuleEngine::default(), cfg)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn resolve(&self, input: &str) -> MatchResult {
        let text = input.trim();
        if text.is_empty() {
            return MatchResult {
                reply: EMPTY_INPUT_REPLY.to_string(),
                source: SourceTag::Error,
                score: 0.0,
            };
        }

        let lowered = text.to_lowercase();

        let query = self.index.project(&lowered);
        if let Some(best) = self.matcher.confident(&self.index, &query) {
            if let Some(entry) = self.corpus.get(best.index) {
                debug!(
                    target: "faq_core::resolve",
                    question = %entry.question,
                    score = best.score,
                    "index match"
                );
                return MatchResult {
                    reply: entry.answer.clone(),
                    source: SourceTag::Ai,
                    score: best.score,
                };
            }
        }

        if let Some(hit) = self.rules.try_rules(&lowered) {
            debug!(target: "faq_core::resolve", rule = hit.rule, "rule match");
            return MatchResult {
                reply: hit.reply.to_string(),
                source: SourceTag::Rule,
                score: hit.score.clamp(0.0, 1.0),
            };
        }

        debug!(target: "faq_core::resolve", "no match, using fallback");
        MatchResult {
            reply: self.fallback_reply.clone(),
            source: SourceTag::Fallback,
            score: 0.0,
        }
    }
}
