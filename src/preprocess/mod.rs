//! Text preprocessing for extracted document text
//!
//! PDF extraction leaves artifacts behind: decorative glyphs, version-number
//! fragments, and erratic whitespace. This module normalizes the raw text
//! and provides the sentence splitter shared by the downstream stages.

use crate::error::{MindweaveError, Result};
use regex::Regex;

/// Sentence fragments at or below this length are discarded by the splitter
pub const MIN_SENTENCE_LEN: usize = 10;

/// Text normalizer with pre-compiled patterns
pub struct Preprocessor {
    horizontal_ws: Regex,
    disallowed: Regex,
    version_token: Regex,
}

impl Preprocessor {
    /// Compile the normalization patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            horizontal_ws: compile(r"[^\S\n]+")?,
            disallowed: compile(r"[^\w\s.,:;!?-]")?,
            version_token: compile(r"\b\d+\.\d+\b")?,
        })
    }

    /// Normalize raw extracted text.
    ///
    /// Collapses runs of horizontal whitespace to single spaces (line breaks
    /// are preserved so structure detection still sees line boundaries),
    /// strips characters outside `[\w\s.,:;!?-]`, removes isolated
    /// version-number tokens, and trims. Empty input yields empty output.
    pub fn clean(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = self.horizontal_ws.replace_all(&text, " ");
        let text = self.disallowed.replace_all(&text, "");
        let text = self.version_token.replace_all(&text, "");
        text.trim().to_string()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| MindweaveError::Generation(format!("invalid pattern {pattern:?}: {e}")))
}

/// Split text into sentences.
///
/// Splits on runs of `.`, `!`, `?`, trims each piece, and discards fragments
/// of [`MIN_SENTENCE_LEN`] characters or fewer. Deterministic and idempotent:
/// re-splitting any returned sentence yields that sentence unchanged.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty() {
        let pre = Preprocessor::new().unwrap();
        assert_eq!(pre.clean(""), "");
    }

    #[test]
    fn test_clean_collapses_spaces_keeps_newlines() {
        let pre = Preprocessor::new().unwrap();
        let out = pre.clean("INTRODUCTION\n\tThe   network  stack.\n");
        assert_eq!(out, "INTRODUCTION\n The network stack.");
    }

    #[test]
    fn test_clean_strips_symbols() {
        let pre = Preprocessor::new().unwrap();
        let out = pre.clean("routing © tables® are {important}");
        assert_eq!(out, "routing  tables are important");
    }

    #[test]
    fn test_clean_removes_version_tokens() {
        let pre = Preprocessor::new().unwrap();
        let out = pre.clean("see chapter 2.4 for details");
        assert_eq!(out, "see chapter  for details");
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences(
            "Routing protocols exchange reachability data. Short. \
             Link state protocols flood updates everywhere!",
        );
        assert_eq!(
            sentences,
            vec![
                "Routing protocols exchange reachability data",
                "Link state protocols flood updates everywhere",
            ]
        );
    }

    #[test]
    fn test_split_sentences_drops_short_fragments() {
        let sentences = split_sentences("Tiny. Bit. Ok then");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_split_sentences_idempotent() {
        let pre = Preprocessor::new().unwrap();
        let cleaned = pre.clean("The first rule of networking applies here. The second rule matters too!");
        let once = split_sentences(&cleaned);
        let twice: Vec<String> = once.iter().flat_map(|s| split_sentences(s)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
    }
}
