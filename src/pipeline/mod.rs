//! Mind-map generation pipeline
//!
//! Orchestrates the ten stages from raw text to serialized graph. The
//! generator is an explicit stateless service: every invocation owns all
//! of its working data, so concurrent callers can run independent
//! generations without coordination.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::{LinguisticAnalyzer, SnowballAnalyzer};
use crate::clustering::ConceptClusterer;
use crate::config::MindMapConfig;
use crate::error::{MindweaveError, Result};
use crate::extraction::{extract_keyphrases, extract_keywords, Keyphrase, Keyword};
use crate::graph::{assemble, MindMap};
use crate::hierarchy::{confidence_score, HierarchyBuilder};
use crate::layout::compute_layout;
use crate::preprocess::{split_sentences, Preprocessor};
use crate::similarity::SimilarityMatrix;
use crate::structure::{DocumentStructure, HeuristicDetector, StructureDetector};

/// Statistics from one generation run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Number of sentences after splitting
    pub sentences: usize,
    /// Headings found by structure detection
    pub headings: usize,
    /// Sections found by structure detection
    pub sections: usize,
    /// Keywords kept after TF-IDF ranking
    pub keywords: usize,
    /// Keyphrases kept after scoring
    pub keyphrases: usize,
    /// Concept clusters after merging
    pub clusters: usize,
    /// Mean pairwise sentence similarity
    pub mean_similarity: f32,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Intermediate artifacts exposed for inspection (CLI `analyze`)
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub structure: DocumentStructure,
    pub keywords: Vec<Keyword>,
    pub keyphrases: Vec<Keyphrase>,
    pub stats: PipelineStats,
}

/// Stateless mind-map generation service
pub struct MindMapGenerator {
    config: MindMapConfig,
    analyzer: Arc<dyn LinguisticAnalyzer>,
    detector: Arc<dyn StructureDetector>,
    preprocessor: Preprocessor,
}

impl MindMapGenerator {
    /// Create a generator with the default analyzer and structure detector
    pub fn new(config: MindMapConfig) -> Result<Self> {
        Self::with_components(
            config,
            Arc::new(SnowballAnalyzer::new()),
            Arc::new(HeuristicDetector::new()?),
        )
    }

    /// Create a generator with injected analysis components
    pub fn with_components(
        config: MindMapConfig,
        analyzer: Arc<dyn LinguisticAnalyzer>,
        detector: Arc<dyn StructureDetector>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            analyzer,
            detector,
            preprocessor: Preprocessor::new()?,
        })
    }

    /// Generate a mind map from extracted document text.
    ///
    /// Degrades gracefully: empty or unparseable input produces a root-only,
    /// low-confidence map. Any unexpected stage failure is converted into a
    /// single [`MindweaveError::Generation`] carrying the triggering message;
    /// no partial output ever crosses this boundary.
    pub fn generate(&self, text: &str) -> Result<MindMap> {
        self.run(text)
            .map(|(map, _)| map)
            .map_err(Self::into_generation_error)
    }

    /// Generate a mind map along with per-stage statistics
    pub fn generate_with_stats(&self, text: &str) -> Result<(MindMap, PipelineStats)> {
        self.run(text).map_err(Self::into_generation_error)
    }

    /// Run extraction stages only, for document inspection
    pub fn analyze(&self, text: &str) -> Result<DocumentAnalysis> {
        let start = Instant::now();
        let cleaned = self.preprocessor.clean(text);
        let structure = self.detector.detect(&cleaned);
        let sentences = split_sentences(&cleaned);
        let keywords = extract_keywords(
            &cleaned,
            self.analyzer.as_ref(),
            self.config.extraction.max_keywords,
        );
        let keyphrases = extract_keyphrases(
            &cleaned,
            self.analyzer.as_ref(),
            self.config.extraction.max_keyphrases,
        );
        let similarity = SimilarityMatrix::build(&sentences, self.analyzer.as_ref());

        let stats = PipelineStats {
            sentences: sentences.len(),
            headings: structure.headings.len(),
            sections: structure.sections.len(),
            keywords: keywords.len(),
            keyphrases: keyphrases.len(),
            clusters: 0,
            mean_similarity: similarity.mean_pairwise(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(DocumentAnalysis {
            structure,
            keywords,
            keyphrases,
            stats,
        })
    }

    fn run(&self, text: &str) -> Result<(MindMap, PipelineStats)> {
        let start = Instant::now();

        let cleaned = self.preprocessor.clean(text);
        let structure = self.detector.detect(&cleaned);
        tracing::debug!(
            headings = structure.headings.len(),
            sections = structure.sections.len(),
            "structure detection complete"
        );

        let sentences = split_sentences(&cleaned);

        let keywords = extract_keywords(
            &cleaned,
            self.analyzer.as_ref(),
            self.config.extraction.max_keywords,
        );
        let keyphrases = extract_keyphrases(
            &cleaned,
            self.analyzer.as_ref(),
            self.config.extraction.max_keyphrases,
        );
        tracing::debug!(
            sentences = sentences.len(),
            keywords = keywords.len(),
            keyphrases = keyphrases.len(),
            "extraction complete"
        );

        let similarity = SimilarityMatrix::build(&sentences, self.analyzer.as_ref());
        let mean_similarity = similarity.mean_pairwise();
        tracing::debug!(mean_similarity, "similarity matrix built");

        let clusterer = ConceptClusterer::new(
            self.config.clustering.cooccurrence_threshold,
            self.config.clustering.merge_threshold,
        );
        let clusters = clusterer.cluster(&keywords, &keyphrases, &sentences, self.analyzer.as_ref());
        tracing::debug!(clusters = clusters.len(), "clustering complete");

        let builder = HierarchyBuilder::new(
            self.config.hierarchy.max_main_nodes,
            self.config.hierarchy.max_sub_nodes,
        );
        let hierarchy = builder.build(&structure, &clusters, &keywords);

        let confidence = confidence_score(&structure, keywords.len(), clusters.len());

        let mut rng = StdRng::seed_from_u64(self.config.layout.seed);
        let positions = compute_layout(
            &hierarchy,
            self.config.layout.main_radius,
            self.config.layout.sub_radius,
            &mut rng,
        );

        let map = assemble(&hierarchy, &positions, confidence);

        let stats = PipelineStats {
            sentences: sentences.len(),
            headings: structure.headings.len(),
            sections: structure.sections.len(),
            keywords: keywords.len(),
            keyphrases: keyphrases.len(),
            clusters: clusters.len(),
            mean_similarity,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            nodes = map.nodes.len(),
            edges = map.edges.len(),
            confidence = map.confidence,
            elapsed_ms = stats.processing_time_ms,
            "mind map generated"
        );

        Ok((map, stats))
    }

    /// Collapse any internal error into the single generation error kind
    fn into_generation_error(error: MindweaveError) -> MindweaveError {
        match error {
            MindweaveError::Generation(_) => error,
            other => MindweaveError::Generation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> MindMapGenerator {
        MindMapGenerator::new(MindMapConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_input_yields_root_only_map() {
        let map = generator().generate("").unwrap();

        assert_eq!(map.nodes.len(), 1);
        assert_eq!(map.nodes[0].id, "root");
        assert!(map.edges.is_empty());
        assert_eq!(map.confidence, 20);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let text = "MEMORY MANAGEMENT\n\
            The allocator tracks free blocks in a sorted list structure. \
            Each allocation request scans the free list for a fitting block. \
            Fragmentation grows when freed blocks cannot coalesce properly. \
            The allocator merges adjacent free blocks during deallocation. \
            Compaction passes relocate live allocations to close the gaps.";
        let gen = generator();

        let a = gen.generate(text).unwrap();
        let b = gen.generate(text).unwrap();

        let ids_a: Vec<&str> = a.nodes.iter().map(|n| n.id.as_str()).collect();
        let ids_b: Vec<&str> = b.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.confidence, b.confidence);
        for (na, nb) in a.nodes.iter().zip(&b.nodes) {
            assert_eq!(na.data.label, nb.data.label);
            assert_eq!(na.position, nb.position);
        }
    }

    #[test]
    fn test_stats_reflect_pipeline() {
        let text = "CACHING STRATEGIES\n\
            Cache eviction policies decide which entries to drop first. \
            Least recently used eviction drops the coldest cache entries. \
            Write back caching delays flushes until eviction happens.";
        let (map, stats) = generator().generate_with_stats(text).unwrap();

        assert_eq!(stats.headings, 1);
        assert_eq!(stats.sentences, 3);
        assert!(stats.keywords > 0);
        assert_eq!(map.metadata.node_count, map.nodes.len());
    }

    #[test]
    fn test_analyze_exposes_intermediates() {
        let text = "SCHEDULING\n\
            The scheduler assigns time slices to runnable processes fairly. \
            Preemptive scheduling interrupts processes at quantum expiry.";
        let analysis = generator().analyze(text).unwrap();

        assert_eq!(analysis.structure.headings.len(), 1);
        assert!(!analysis.keywords.is_empty());
        assert!((0.0..=1.0).contains(&analysis.stats.mean_similarity));
    }
}
