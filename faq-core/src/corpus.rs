//! Corpus Store: the fixed table of canonical questions and their answers.
//!
//! Position in the corpus is stable for the process lifetime and is the key
//! used to map an index row back to its answer.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{config::FaqConfig, errors::FaqError};

/// One canonical question (lowercase) and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered, immutable question/answer table.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<QaEntry>,
}

const BUILTIN: &[(&str, &str)] = &[
    // greetings
    ("hi", "Hello, I am Sidra. How can I help you?"),
    ("hello", "Hello! How can I assist you today?"),
    ("hey", "Hi there! How can I help?"),
    // admissions
    ("admission deadline", "Admissions close on July 31 every year."),
    ("what is the admission deadline", "Admissions close on July 31 every year."),
    (
        "what is the last day for submission?",
        "The last day for submission of application forms is 31 July.",
    ),
    (
        "how to apply for admission",
        "You can apply online through our official college website.",
    ),
    (
        "admission process",
        "Admissions are based on entrance exams and merit as per university norms.",
    ),
    // courses
    (
        "what are the courses that you are offering?",
        "We offer B.Tech in CSE, ECE, ME, Civil, and AI&DS, plus MBA and MCA programmes.",
    ),
    (
        "courses offered",
        "We offer B.Tech, MBA, and MCA programs in multiple specializations.",
    ),
    (
        "btech courses",
        "B.Tech is available in CSE, ECE, ME, Civil, and AI & Data Science.",
    ),
    // location
    (
        "where is the campus located?",
        "Our campus is located at Vertex College, Jesus Main Road, ZA, Nor, 10300.",
    ),
    (
        "college address",
        "Our campus is located at Vertex College, Jesus Main Road, ZA, Nor, 10300.",
    ),
    // contact
    (
        "how to contact the admission office",
        "You can email info@vertexcollege.ac.in or call +91-98765 43210.",
    ),
    ("contact number", "You can call us at +91-98765 43210."),
    ("email id", "You can email us at info@vertexcollege.ac.in."),
    // website
    (
        "what is your college website?",
        "You can visit our college website at http://127.0.0.1:5000/",
    ),
    (
        "provide me the college website",
        "Here is our college website: http://127.0.0.1:5000/",
    ),
    (
        "college website link",
        "Visit our official website at http://127.0.0.1:5000/",
    ),
    // fees
    (
        "fee structure",
        "The annual fee ranges from ₹70,000 to ₹1,20,000 depending on the course.",
    ),
    ("btech fees", "The B.Tech annual fee is approximately ₹1,00,000."),
    ("mba fees", "The MBA annual fee is approximately ₹1,20,000."),
    ("mca fees", "The MCA annual fee is approximately ₹90,000."),
    // hostel
    (
        "hostel facility",
        "Yes, separate hostel facilities are available for both boys and girls.",
    ),
    (
        "hostel fees",
        "The hostel fee is approximately ₹60,000 per year including food.",
    ),
    (
        "is hostel available",
        "Yes, secure hostel accommodation is available inside the campus.",
    ),
    // placements
    (
        "placements",
        "Vertex College has a 90% placement rate with top recruiters every year.",
    ),
    (
        "placement details",
        "Our highest package is ₹12 LPA and average package is ₹4.5 LPA.",
    ),
    (
        "companies visiting",
        "Top recruiters include TCS, Infosys, Wipro, Amazon, and Capgemini.",
    ),
    // scholarship
    (
        "scholarship",
        "Scholarships are available for merit students and government category students.",
    ),
    (
        "scholarship details",
        "Students can apply for state and central government scholarships.",
    ),
    (
        "fee concession",
        "Fee concession is provided to eligible students under scholarship schemes.",
    ),
    // faculty
    (
        "faculty details",
        "Our faculty members are highly experienced and most hold PhD qualifications.",
    ),
    (
        "teaching staff",
        "We have well-qualified and industry-experienced teaching staff.",
    ),
    ("professors", "Our professors are experts in their respective domains."),
    // library & labs
    (
        "library",
        "Our digital library is equipped with over 50,000 books and online journals.",
    ),
    (
        "lab facilities",
        "We have modern computer labs, electronics labs, and research centers.",
    ),
    (
        "computer lab",
        "Our computer labs are equipped with high-speed internet and latest systems.",
    ),
];

impl Corpus {
    /// Validates and normalizes a table.
    ///
    /// Questions are trimmed and lowercased; blank questions and
    /// case-insensitive duplicates are rejected. Order is preserved.
    pub fn new(entries: Vec<QaEntry>) -> Result<Self, FaqError> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut out = Vec::with_capacity(entries.len());

        for (pos, e) in entries.into_iter().enumerate() {
            let question = e.question.trim().to_lowercase();
            if question.is_empty() {
                return Err(FaqError::EmptyQuestion(pos));
            }
            if !seen.insert(question.clone()) {
                return Err(FaqError::DuplicateQuestion(question));
            }
            out.push(QaEntry {
                question,
                answer: e.answer,
            });
        }

        Ok(Self { entries: out })
    }

    /// The college FAQ table shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(q, a)| QaEntry::new(*q, *a))
                .collect(),
        }
    }

    /// Loads `[{"question": ..., "answer": ...}, ...]` from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FaqError> {
        let raw = std::fs::read(path.as_ref())?;
        let entries: Vec<QaEntry> = serde_json::from_slice(&raw)?;
        Self::new(entries)
    }

    /// Picks the configured source: `STATIC_QA_PATH` if set, else the built-in table.
    pub fn load(cfg: &FaqConfig) -> Result<Self, FaqError> {
        let corpus = match &cfg.corpus_path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::builtin(),
        };
        let source = cfg
            .corpus_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".into());
        info!(
            target: "faq_core::corpus",
            entries = corpus.len(),
            source = %source,
            "corpus loaded"
        );
        Ok(corpus)
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&QaEntry> {
        self.entries.get(index)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let builtin = Corpus::builtin();
        let revalidated = Corpus::new(builtin.entries().to_vec()).unwrap();
        assert_eq!(builtin.entries(), revalidated.entries());
        assert_eq!(builtin.get(0).unwrap().question, "hi");
    }

    #[test]
    fn questions_are_normalized() {
        let c = Corpus::new(vec![QaEntry::new("  Fee Structure ", "a")]).unwrap();
        assert_eq!(c.get(0).unwrap().question, "fee structure");
    }

    #[test]
    fn case_insensitive_duplicates_are_rejected() {
        let err = Corpus::new(vec![QaEntry::new("Library", "a"), QaEntry::new("library", "b")])
            .unwrap_err();
        assert!(matches!(err, FaqError::DuplicateQuestion(q) if q == "library"));
    }

    #[test]
    fn blank_question_is_rejected() {
        let err = Corpus::new(vec![QaEntry::new("ok", "a"), QaEntry::new("   ", "b")]).unwrap_err();
        assert!(matches!(err, FaqError::EmptyQuestion(1)));
    }

    #[test]
    fn loads_json_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        std::fs::write(
            &path,
            r#"[{"question":"Parking","answer":"Lot B"},{"question":"canteen","answer":"Block C"}]"#,
        )
        .unwrap();

        let c = Corpus::from_json_file(&path).unwrap();
        assert_eq!(c.questions().collect::<Vec<_>>(), vec!["parking", "canteen"]);
    }

    #[test]
    fn load_prefers_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        std::fs::write(&path, r#"[{"question":"gym","answer":"Open 6-9"}]"#).unwrap();

        let cfg = FaqConfig {
            corpus_path: Some(path),
            ..FaqConfig::default()
        };
        assert_eq!(Corpus::load(&cfg).unwrap().len(), 1);
        assert_eq!(Corpus::load(&FaqConfig::default()).unwrap().len(), Corpus::builtin().len());
    }
}
