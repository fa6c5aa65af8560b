//! Linguistic analysis capability for the mind-map pipeline
//!
//! Tokenization, stemming, and stopword lookup are injected behind the
//! `LinguisticAnalyzer` trait so the pipeline stages stay testable
//! independent of any particular tokenizer's quirks.

mod stopwords;

pub use stopwords::ENGLISH_STOPWORDS;

use ahash::AHashSet;
use rust_stemmers::{Algorithm, Stemmer};

/// Academic vocabulary that receives a scoring boost during keyword
/// extraction. Matched on stems so inflected variants qualify too.
pub const ACADEMIC_TERMS: &[&str] = &[
    "definition",
    "concept",
    "theory",
    "principle",
    "method",
    "approach",
    "analysis",
    "synthesis",
    "evaluation",
    "application",
    "implementation",
    "structure",
    "function",
    "process",
    "system",
    "model",
    "framework",
    "algorithm",
    "protocol",
    "standard",
    "specification",
    "architecture",
];

/// Minimum token length kept for analysis (tokens of 2 chars or fewer are noise)
pub const MIN_TOKEN_LEN: usize = 3;

/// Trait for linguistic analysis backends
///
/// Allows abstraction over different tokenizer/stemmer implementations.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Split text into lowercase word tokens, in document order
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Reduce a lowercase token to its root form
    fn stem(&self, token: &str) -> String;

    /// Whether a lowercase token carries no analytical information
    fn is_stopword(&self, token: &str) -> bool;

    /// Whether a stem belongs to the boosted academic vocabulary
    fn is_academic_stem(&self, stem: &str) -> bool;

    /// Tokenize, drop stopwords and short tokens, and stem the survivors.
    /// Returns (surface, stem) pairs in document order.
    fn content_tokens(&self, text: &str) -> Vec<(String, String)> {
        self.tokenize(text)
            .into_iter()
            .filter(|t| t.len() >= MIN_TOKEN_LEN && !self.is_stopword(t))
            .map(|t| {
                let stem = self.stem(&t);
                (t, stem)
            })
            .collect()
    }

    /// Stems of all content tokens in the text
    fn content_stems(&self, text: &str) -> Vec<String> {
        self.content_tokens(text)
            .into_iter()
            .map(|(_, stem)| stem)
            .collect()
    }
}

/// Default analyzer: Snowball (Porter2) stemming with a static English
/// stopword list.
pub struct SnowballAnalyzer {
    stemmer: Stemmer,
    stopwords: AHashSet<&'static str>,
    academic_stems: AHashSet<String>,
}

impl SnowballAnalyzer {
    /// Create the default English analyzer
    pub fn new() -> Self {
        let stemmer = Stemmer::create(Algorithm::English);
        let academic_stems = ACADEMIC_TERMS
            .iter()
            .map(|t| stemmer.stem(t).to_string())
            .collect();

        Self {
            stemmer,
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            academic_stems,
        }
    }
}

impl Default for SnowballAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticAnalyzer for SnowballAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).to_string()
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    fn is_academic_stem(&self, stem: &str) -> bool {
        self.academic_stems.contains(stem)
    }
}
