//! Heading and section detection for unstructured document text
//!
//! Extracted PDF text carries no reliable markup, so structure is inferred
//! from surface formatting conventions (numbered lines, ALL-CAPS titles,
//! short colon-terminated lines). Best-effort by nature; the detector sits
//! behind a trait so a real document-structure parser could replace it
//! without touching the downstream stages.

use crate::error::{MindweaveError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A section must accumulate more than this many characters of content
/// before a new heading is allowed to close it
const MIN_SECTION_CHARS: usize = 100;

/// A detected heading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text as it appears in the document
    pub text: String,
    /// Inferred level, 1 (top) through 3
    pub level: u8,
    /// Index of the line within the non-empty lines of the document
    pub line_index: usize,
}

/// A run of content lines under one heading (or before the first heading)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Heading that opened this section, if any
    pub heading: Option<Heading>,
    /// Content lines in document order
    pub content: Vec<String>,
    /// Line index where the section starts
    pub start_index: usize,
}

/// Detected document structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub headings: Vec<Heading>,
    pub sections: Vec<Section>,
}

/// Trait for document structure detection backends
pub trait StructureDetector: Send + Sync {
    /// Scan cleaned text for headings and sections
    fn detect(&self, text: &str) -> DocumentStructure;
}

/// Rule-based detector using surface formatting heuristics
pub struct HeuristicDetector {
    numbered: Regex,
    capitalized_words: Regex,
    leading_numbering: Regex,
}

impl HeuristicDetector {
    /// Compile the heading patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            numbered: compile(r"^(\d+\.?\s+)+[A-Z]")?,
            capitalized_words: compile(r"^(?:[A-Z][a-z]+\s+)*[A-Z][a-z]+:?$")?,
            leading_numbering: compile(r"^[\d.\s]+")?,
        })
    }

    /// Whether a trimmed, non-empty line reads like a heading
    fn is_heading(&self, line: &str) -> bool {
        if self.numbered.is_match(line) {
            return true;
        }
        if line.len() > 5 && line.len() < 100 && is_all_uppercase(line) {
            return true;
        }
        if line.len() < 80 && line.ends_with(':') && !line.contains('.') {
            return true;
        }
        if line.len() < 60 && self.capitalized_words.is_match(line) {
            return true;
        }
        false
    }

    /// Infer heading level from formatting.
    ///
    /// Numbering depth wins ("2.1 Flow Control" is level 2, capped at 3);
    /// ALL-CAPS lines are top-level; colon-terminated and capitalized-word
    /// headings are level 2.
    fn heading_level(&self, line: &str) -> u8 {
        if self.numbered.is_match(line) {
            if let Some(m) = self.leading_numbering.find(line) {
                let depth = m
                    .as_str()
                    .split(|c: char| c == '.' || c.is_whitespace())
                    .filter(|part| !part.is_empty())
                    .count();
                return depth.clamp(1, 3) as u8;
            }
            return 1;
        }
        if is_all_uppercase(line) {
            return 1;
        }
        2
    }
}

impl StructureDetector for HeuristicDetector {
    fn detect(&self, text: &str) -> DocumentStructure {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut headings = Vec::new();
        let mut sections = Vec::new();
        let mut current: Option<Section> = None;

        for (index, line) in lines.iter().enumerate() {
            if self.is_heading(line) {
                let heading = Heading {
                    text: line.to_string(),
                    level: self.heading_level(line),
                    line_index: index,
                };

                // A new heading closes the current section only once it has
                // accumulated a meaningful amount of content
                if let Some(section) = current.take() {
                    if section_chars(&section) > MIN_SECTION_CHARS {
                        sections.push(section);
                    }
                }

                current = Some(Section {
                    heading: Some(heading.clone()),
                    content: Vec::new(),
                    start_index: index,
                });
                headings.push(heading);
            } else {
                current
                    .get_or_insert_with(|| Section {
                        heading: None,
                        content: Vec::new(),
                        start_index: index,
                    })
                    .content
                    .push(line.to_string());
            }
        }

        // Trailing section is kept whenever it has any content
        if let Some(section) = current {
            if !section.content.is_empty() {
                sections.push(section);
            }
        }

        DocumentStructure { headings, sections }
    }
}

fn section_chars(section: &Section) -> usize {
    section.content.iter().map(|l| l.len()).sum()
}

fn is_all_uppercase(line: &str) -> bool {
    line.chars().any(|c| c.is_alphabetic()) && !line.chars().any(|c| c.is_lowercase())
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| MindweaveError::Generation(format!("invalid pattern {pattern:?}: {e}")))
}
