//! Sentence similarity matrix
//!
//! Dense n x n cosine-similarity matrix over stemmed term-frequency
//! vectors. O(n^2 * |vocab|), which is acceptable for the sentence counts
//! typical of a single document; callers that feed pathological inputs are
//! expected to cap size upstream.

use ahash::AHashMap;
use ndarray::Array2;

use crate::analysis::LinguisticAnalyzer;

/// Pairwise cosine similarity between sentences
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    matrix: Array2<f32>,
}

impl SimilarityMatrix {
    /// Build the matrix from sentences.
    ///
    /// The diagonal is pinned to 1.0 by definition, including for sentences
    /// whose term vector is empty after stopword filtering.
    pub fn build(sentences: &[String], analyzer: &dyn LinguisticAnalyzer) -> Self {
        let n = sentences.len();
        let vectors: Vec<AHashMap<String, f32>> = sentences
            .iter()
            .map(|s| term_frequencies(s, analyzer))
            .collect();

        let mut matrix = Array2::zeros((n, n));
        for i in 0..n {
            matrix[(i, i)] = 1.0;
            for j in (i + 1)..n {
                let sim = cosine_similarity(&vectors[i], &vectors[j]);
                matrix[(i, j)] = sim;
                matrix[(j, i)] = sim;
            }
        }

        Self { matrix }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Similarity between sentences i and j
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.matrix[(i, j)]
    }

    /// Mean similarity over all distinct sentence pairs.
    /// Used for stage diagnostics; 0.0 when fewer than two sentences.
    pub fn mean_pairwise(&self) -> f32 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                sum += self.matrix[(i, j)];
            }
        }
        sum / (n * (n - 1) / 2) as f32
    }
}

fn term_frequencies(sentence: &str, analyzer: &dyn LinguisticAnalyzer) -> AHashMap<String, f32> {
    let mut freqs = AHashMap::new();
    for stem in analyzer.content_stems(sentence) {
        *freqs.entry(stem).or_insert(0.0) += 1.0;
    }
    freqs
}

/// Cosine similarity of two sparse frequency maps.
/// Returns 0.0 when either vector has zero norm.
fn cosine_similarity(a: &AHashMap<String, f32>, b: &AHashMap<String, f32>) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f32 = small
        .iter()
        .filter_map(|(stem, &count)| large.get(stem).map(|&other| count * other))
        .sum();

    let norm_a: f32 = a.values().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|v| v * v).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SnowballAnalyzer;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diagonal_is_one() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(
            &sentences(&[
                "routers forward packets across networks",
                "the the the of of of",
            ]),
            &analyzer,
        );
        assert_eq!(matrix.get(0, 0), 1.0);
        // Even a sentence that is all stopwords keeps its diagonal
        assert_eq!(matrix.get(1, 1), 1.0);
    }

    #[test]
    fn test_identical_sentences_fully_similar() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(
            &sentences(&[
                "routers forward packets across networks",
                "routers forward packets across networks",
            ]),
            &analyzer,
        );
        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_sentences_zero() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(
            &sentences(&[
                "routers forward packets quickly",
                "gardens grow colorful flowers",
            ]),
            &analyzer,
        );
        assert_eq!(matrix.get(0, 1), 0.0);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(
            &sentences(&[
                "packet switching moves data in bursts",
                "circuit switching reserves a path",
                "data moves through switching fabrics",
            ]),
            &analyzer,
        );
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(&[], &analyzer);
        assert!(matrix.is_empty());
        assert_eq!(matrix.mean_pairwise(), 0.0);
    }

    #[test]
    fn test_mean_pairwise_bounds() {
        let analyzer = SnowballAnalyzer::new();
        let matrix = SimilarityMatrix::build(
            &sentences(&[
                "congestion windows grow until loss",
                "loss shrinks congestion windows sharply",
            ]),
            &analyzer,
        );
        let mean = matrix.mean_pairwise();
        assert!((0.0..=1.0).contains(&mean));
        assert!(mean > 0.0);
    }
}
