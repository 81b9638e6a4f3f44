//! Vectorizer/Index: TF-IDF space over the canonical questions.
//!
//! Built once at startup and read-only afterwards. Weights are raw term counts
//! scaled by a smoothed inverse document frequency
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, and every vector is L2-normalised.
//! Query tokens outside the vocabulary are ignored.

use std::{collections::BTreeMap, time::Instant};

use tracing::info;

use crate::{corpus::Corpus, errors::FaqError, tokenizer::Tokenizer};

/// A query projected into the index space. Lives for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector(Vec<f32>);

impl QueryVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// True when the query shares no term with the vocabulary.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0.0)
    }
}

#[derive(Debug, Clone)]
pub struct TfidfIndex {
    tokenizer: Tokenizer,
    /// term -> column, columns in sorted term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f32>,
    rows: Vec<Vec<f32>>,
}

impl TfidfIndex {
    /// Builds the space from questions in corpus order.
    pub fn build<'a, I>(questions: I) -> Result<Self, FaqError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let started = Instant::now();
        let tokenizer = Tokenizer::new()?;

        let docs: Vec<Vec<String>> = questions
            .into_iter()
            .map(|q| tokenizer.tokenize(q))
            .collect();

        let mut vocabulary: BTreeMap<String, usize> = docs
            .iter()
            .flatten()
            .map(|t| (t.clone(), 0))
            .collect();
        for (col, slot) in vocabulary.values_mut().enumerate() {
            *slot = col;
        }

        // document frequency per column
        let mut df = vec![0usize; vocabulary.len()];
        for doc in &docs {
            let mut cols: Vec<usize> = doc
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            cols.sort_unstable();
            cols.dedup();
            for c in cols {
                df[c] += 1;
            }
        }

        let n = docs.len() as f32;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let mut index = Self {
            tokenizer,
            vocabulary,
            idf,
            rows: Vec::new(),
        };
        let rows = docs.iter().map(|doc| index.weigh(doc)).collect();
        index.rows = rows;

        info!(
            target: "faq_core::index",
            questions = index.rows.len(),
            vocabulary = index.vocabulary.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "tf-idf index built"
        );
        Ok(index)
    }

    pub fn from_corpus(corpus: &Corpus) -> Result<Self, FaqError> {
        Self::build(corpus.questions())
    }

    /// Projects arbitrary text into the index space. Pure.
    pub fn project(&self, text: &str) -> QueryVector {
        QueryVector(self.weigh(&self.tokenizer.tokenize(text)))
    }

    /// One L2-normalised vector per canonical question, corpus order.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Number of vocabulary terms (vector length).
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f32> {
        let mut v = vec![0.0f32; self.vocabulary.len()];
        for t in tokens {
            if let Some(&col) = self.vocabulary.get(t) {
                v[col] += 1.0;
            }
        }
        for (w, idf) in v.iter_mut().zip(&self.idf) {
            *w *= idf;
        }

        let norm = v.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for w in &mut v {
                *w /= norm;
            }
        }
        v
    }
}
