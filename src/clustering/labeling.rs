// Cluster label selection: best keyword surface form, or a strong
// overlapping keyphrase when one exists
use crate::clustering::{phrase_overlaps, Cluster};

/// Labels longer than this are truncated with a trailing ellipsis
const MAX_LABEL_LEN: usize = 50;

/// A keyphrase must score above this to displace the keyword label
const PHRASE_LABEL_MIN_SCORE: f32 = 2.0;

/// Produce the display label for a cluster.
///
/// Ranks member keywords by TF-IDF score and takes the best surface form;
/// an attached keyphrase that overlaps the cluster's stems and scores above
/// [`PHRASE_LABEL_MIN_SCORE`] is preferred since multi-word labels read
/// better on a rendered map. The result is title-cased and truncated to
/// [`MAX_LABEL_LEN`] characters.
pub fn label_cluster(cluster: &Cluster) -> String {
    let best_keyword = cluster
        .keywords
        .iter()
        .max_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|k| k.term.clone())
        .unwrap_or_default();

    let stems = cluster.stems();
    let best_phrase = cluster
        .keyphrases
        .iter()
        .filter(|p| p.score > PHRASE_LABEL_MIN_SCORE && phrase_overlaps(&p.phrase, &stems))
        .max_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let label = match best_phrase {
        Some(phrase) => phrase.phrase.clone(),
        None => best_keyword,
    };

    truncate_label(&title_case(&label))
}

/// Capitalize the first letter of each whitespace-separated word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_LEN {
        let head: String = label.chars().take(MAX_LABEL_LEN).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}
