//! Matcher: cosine similarity against every indexed question.

use crate::index::{QueryVector, TfidfIndex};

/// Best-scoring canonical question for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Corpus position.
    pub index: usize,
    /// Cosine similarity in [0, 1].
    pub score: f32,
}

/// Cosine of the angle between `a` and `b`; 0 when either has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na * nb)).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    threshold: f32,
}

impl Matcher {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Highest similarity over the whole index, ties going to the earliest
    /// question. `None` only for an empty index.
    pub fn best(&self, index: &TfidfIndex, query: &QueryVector) -> Option<BestMatch> {
        let mut best: Option<BestMatch> = None;
        for (i, row) in index.rows().iter().enumerate() {
            let score = cosine_similarity(query.as_slice(), row);
            match best {
                Some(b) if score <= b.score => {}
                _ => best = Some(BestMatch { index: i, score }),
            }
        }
        best
    }

    /// The best match if it strictly exceeds the threshold.
    pub fn confident(&self, index: &TfidfIndex, query: &QueryVector) -> Option<BestMatch> {
        self.best(index, query).filter(|b| b.score > self.threshold)
    }
}
