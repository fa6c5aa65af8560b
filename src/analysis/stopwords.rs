// Static English stopword list used by the default analyzer.
// Kept deliberately generic; domain terms are never filtered here.

/// High-frequency, low-information English words excluded from keyword
/// and keyphrase analysis.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
    "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "like", "may", "me", "might", "more", "most", "must", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "within", "without", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_lowercase() {
        for word in ENGLISH_STOPWORDS {
            assert_eq!(*word, word.to_lowercase(), "stopword not lowercase: {word}");
        }
    }

    #[test]
    fn test_stopwords_sorted_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in ENGLISH_STOPWORDS {
            assert!(seen.insert(*word), "duplicate stopword: {word}");
        }
    }
}
