// RAKE-style keyphrase extraction: adjacent content-word n-grams scored by
// frequency weighted by phrase length
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::LinguisticAnalyzer;
use crate::preprocess::split_sentences;

/// Weight applied per word of phrase length
const LENGTH_WEIGHT: f32 = 0.5;

/// A scored 2-3 word phrase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyphrase {
    /// Lowercased phrase, words joined by single spaces
    pub phrase: String,
    /// Number of words in the phrase (2 or 3)
    pub words: usize,
    /// Occurrences across the whole document
    pub frequency: u32,
    /// frequency * (words * 0.5) - longer repeated phrases win
    pub score: f32,
}

/// Extract the top `max_keyphrases` phrases.
///
/// Stopwords and short tokens are removed first; every adjacent pair and
/// triple in the surviving token stream of each sentence becomes a
/// candidate phrase.
pub fn extract_keyphrases(
    text: &str,
    analyzer: &dyn LinguisticAnalyzer,
    max_keyphrases: usize,
) -> Vec<Keyphrase> {
    let mut frequencies: AHashMap<String, u32> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();

    for sentence in split_sentences(text) {
        let tokens: Vec<String> = analyzer
            .content_tokens(&sentence)
            .into_iter()
            .map(|(surface, _)| surface)
            .collect();

        for window in [2usize, 3] {
            if tokens.len() < window {
                continue;
            }
            for chunk in tokens.windows(window) {
                let phrase = chunk.join(" ");
                match frequencies.get_mut(&phrase) {
                    Some(count) => *count += 1,
                    None => {
                        frequencies.insert(phrase.clone(), 1);
                        order.push(phrase);
                    }
                }
            }
        }
    }

    let mut keyphrases: Vec<Keyphrase> = order
        .into_iter()
        .map(|phrase| {
            let frequency = frequencies[&phrase];
            let words = phrase.split(' ').count();
            Keyphrase {
                frequency,
                words,
                score: frequency as f32 * (words as f32 * LENGTH_WEIGHT),
                phrase,
            }
        })
        .collect();

    keyphrases.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keyphrases.truncate(max_keyphrases);
    keyphrases
}
