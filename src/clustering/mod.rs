//! Concept clustering
//!
//! Groups keywords by sentence co-occurrence with a greedy single pass,
//! attaches related keyphrases, then folds undersized clusters into their
//! nearest larger neighbor by Jaccard similarity.
//!
//! The pass is order-dependent by design: the first unused keyword, in
//! descending TF-IDF rank, seeds each cluster. That ordering is the
//! tie-break policy that keeps output reproducible, so callers must hand
//! keywords over in rank order.

mod labeling;

pub use labeling::{label_cluster, title_case};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::LinguisticAnalyzer;
use crate::extraction::{Keyword, Keyphrase};

/// A group of related keywords with their supporting phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Stable id in creation order
    pub id: usize,
    /// Member keywords, seed first; never empty for emitted clusters
    pub keywords: Vec<Keyword>,
    /// Keyphrases whose words overlap the member keywords
    pub keyphrases: Vec<Keyphrase>,
}

impl Cluster {
    /// Stem set of the member keywords
    pub fn stems(&self) -> AHashSet<&str> {
        self.keywords.iter().map(|k| k.stem.as_str()).collect()
    }
}

/// Greedy co-occurrence clusterer
pub struct ConceptClusterer {
    /// Minimum fraction of sentences containing both terms to fuse them
    cooccurrence_threshold: f32,
    /// Minimum Jaccard similarity for a small cluster to be absorbed
    merge_threshold: f32,
}

impl ConceptClusterer {
    pub fn new(cooccurrence_threshold: f32, merge_threshold: f32) -> Self {
        Self {
            cooccurrence_threshold,
            merge_threshold,
        }
    }

    /// Cluster keywords by sentence co-occurrence.
    ///
    /// `keywords` must be in descending TF-IDF rank order; the result order
    /// follows seed rank and is consumed as-is by the hierarchy builder.
    pub fn cluster(
        &self,
        keywords: &[Keyword],
        keyphrases: &[Keyphrase],
        sentences: &[String],
        analyzer: &dyn LinguisticAnalyzer,
    ) -> Vec<Cluster> {
        if keywords.is_empty() || sentences.is_empty() {
            return Vec::new();
        }

        let sentence_stems: Vec<AHashSet<String>> = sentences
            .iter()
            .map(|s| analyzer.content_stems(s).into_iter().collect())
            .collect();
        let total = sentences.len() as f32;

        let mut used = vec![false; keywords.len()];
        let mut clusters = Vec::new();

        for i in 0..keywords.len() {
            if used[i] {
                continue;
            }
            used[i] = true;

            let mut cluster = Cluster {
                id: clusters.len(),
                keywords: vec![keywords[i].clone()],
                keyphrases: Vec::new(),
            };

            for (j, candidate) in keywords.iter().enumerate() {
                if used[j] {
                    continue;
                }
                let both = sentence_stems
                    .iter()
                    .filter(|set| set.contains(&keywords[i].stem) && set.contains(&candidate.stem))
                    .count();
                if both as f32 / total > self.cooccurrence_threshold {
                    cluster.keywords.push(candidate.clone());
                    used[j] = true;
                }
            }

            let stems: AHashSet<&str> = cluster.keywords.iter().map(|k| k.stem.as_str()).collect();
            let attached: Vec<Keyphrase> = keyphrases
                .iter()
                .filter(|phrase| phrase_overlaps(&phrase.phrase, &stems))
                .cloned()
                .collect();
            cluster.keyphrases = attached;

            clusters.push(cluster);
        }

        self.merge_small_clusters(clusters)
    }

    /// Fold clusters with fewer than two keywords into the larger cluster
    /// they most resemble. A small cluster stays standalone when no large
    /// cluster exceeds the merge threshold.
    pub fn merge_small_clusters(&self, clusters: Vec<Cluster>) -> Vec<Cluster> {
        if !clusters.iter().any(|c| c.keywords.len() >= 2) {
            return clusters;
        }

        let mut merged: Vec<Cluster> = Vec::with_capacity(clusters.len());
        let mut pending: Vec<Cluster> = Vec::new();

        for cluster in clusters {
            if cluster.keywords.len() >= 2 {
                merged.push(cluster);
            } else {
                pending.push(cluster);
            }
        }

        let mut standalone = Vec::new();
        for small in pending {
            let small_stems: AHashSet<String> =
                small.keywords.iter().map(|k| k.stem.clone()).collect();

            let mut best: Option<(usize, f32)> = None;
            for (idx, large) in merged.iter().enumerate() {
                let large_stems: AHashSet<String> =
                    large.keywords.iter().map(|k| k.stem.clone()).collect();
                let sim = jaccard(&small_stems, &large_stems);
                if best.map_or(true, |(_, s)| sim > s) {
                    best = Some((idx, sim));
                }
            }

            match best {
                Some((idx, sim)) if sim > self.merge_threshold => {
                    let target = &mut merged[idx];
                    for keyword in small.keywords {
                        if !target.keywords.iter().any(|k| k.stem == keyword.stem) {
                            target.keywords.push(keyword);
                        }
                    }
                    for phrase in small.keyphrases {
                        if !target.keyphrases.iter().any(|p| p.phrase == phrase.phrase) {
                            target.keyphrases.push(phrase);
                        }
                    }
                }
                _ => standalone.push(small),
            }
        }

        merged.extend(standalone);
        merged.sort_by_key(|c| c.id);
        merged
    }
}

/// Jaccard similarity of two stem sets: |intersection| / |union|
pub fn jaccard(a: &AHashSet<String>, b: &AHashSet<String>) -> f32 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f32 / union as f32
}

/// Whether any word of the phrase overlaps any cluster stem, where overlap
/// means either string contains the other
pub fn phrase_overlaps(phrase: &str, stems: &AHashSet<&str>) -> bool {
    phrase
        .split(' ')
        .any(|word| stems.iter().any(|stem| word.contains(stem) || stem.contains(word)))
}
