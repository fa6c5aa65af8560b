// TF-IDF keyword extraction over sentence-level documents
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::LinguisticAnalyzer;
use crate::preprocess::split_sentences;

/// Score multiplier for terms in the academic vocabulary
const ACADEMIC_BOOST: f32 = 1.5;

/// A scored term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    /// Surface form as first seen in the document
    pub term: String,
    /// Stemmed form used for all set operations
    pub stem: String,
    /// TF-IDF score (academic boost applied)
    pub score: f32,
    /// Term frequency: global stem count over distinct stem count.
    /// Deliberately nonstandard; downstream thresholds are tuned against it.
    pub tf: f32,
    /// Number of sentences containing the stem
    pub doc_freq: usize,
}

/// Extract the top `max_keywords` terms by TF-IDF.
///
/// Each sentence is one document for IDF purposes. TF divides the global
/// stem count by the number of distinct stems rather than the token total;
/// this formula is preserved as-is because the clustering thresholds were
/// tuned against it.
pub fn extract_keywords(
    text: &str,
    analyzer: &dyn LinguisticAnalyzer,
    max_keywords: usize,
) -> Vec<Keyword> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }
    let total_sentences = sentences.len();

    let mut counts: AHashMap<String, u32> = AHashMap::new();
    let mut surfaces: AHashMap<String, String> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut sentence_stems: Vec<AHashSet<String>> = Vec::with_capacity(total_sentences);

    for sentence in &sentences {
        let mut stems_here = AHashSet::new();
        for (surface, stem) in analyzer.content_tokens(sentence) {
            match counts.get_mut(&stem) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(stem.clone(), 1);
                    surfaces.insert(stem.clone(), surface);
                    order.push(stem.clone());
                }
            }
            stems_here.insert(stem);
        }
        sentence_stems.push(stems_here);
    }

    let distinct = counts.len().max(1) as f32;

    let mut keywords: Vec<Keyword> = order
        .iter()
        .map(|stem| {
            let tf = counts[stem] as f32 / distinct;
            // Guard against a zero document frequency to keep ln() finite
            let doc_freq = sentence_stems
                .iter()
                .filter(|set| set.contains(stem))
                .count()
                .max(1);
            let mut score = tf * (total_sentences as f32 / doc_freq as f32).ln();
            if analyzer.is_academic_stem(stem) {
                score *= ACADEMIC_BOOST;
            }
            Keyword {
                term: surfaces[stem].clone(),
                stem: stem.clone(),
                score,
                tf,
                doc_freq,
            }
        })
        .collect();

    // Stable sort keeps first-seen order on score ties, which keeps the
    // greedy clustering downstream reproducible
    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keywords.truncate(max_keywords);
    keywords
}
