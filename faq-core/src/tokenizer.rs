use regex::Regex;

use crate::errors::FaqError;

/// Word runs of two or more Unicode word characters.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Lowercasing word splitter shared by index build and query projection.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, FaqError> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Tokens in text order, duplicates kept (they carry term frequency).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.pattern
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
