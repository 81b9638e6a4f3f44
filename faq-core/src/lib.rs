//! FAQ matching core.
//!
//! Public API:
//! - [`Corpus`]: the fixed question/answer table (built-in or from JSON).
//! - [`TfidfIndex`]: term-weighted vectors for every canonical question.
//! - [`Matcher`]: cosine similarity, earliest-question tie-break, strict threshold.
//! - [`RuleEngine`]: ordered keyword-substring rules.
//! - [`ReplyResolver`]: validate → index → rules → fallback.
//! - [`Conversation`]: resolver plus the append-only chat log.
//!
//! Everything except the log sink is immutable once built and safe to share
//! across concurrent requests.

pub mod config;
pub mod conversation;
pub mod corpus;
pub mod errors;
pub mod index;
pub mod matcher;
pub mod resolver;
pub mod rules;
mod tokenizer;

pub use config::FaqConfig;
pub use conversation::{ANONYMOUS_SESSION, Conversation};
pub use corpus::{Corpus, QaEntry};
pub use errors::FaqError;
pub use index::{QueryVector, TfidfIndex};
pub use matcher::{BestMatch, Matcher, cosine_similarity};
pub use resolver::{EMPTY_INPUT_REPLY, MatchResult, ReplyResolver, SourceTag};
pub use rules::{KeywordRule, RuleEngine, RuleHit};
