// Composite 0-100 confidence score for a generated mind map
use crate::structure::DocumentStructure;

/// Keyword count at which keyword density saturates
const KEYWORD_SATURATION: f32 = 30.0;

/// Cluster count at which cluster cohesion saturates
const CLUSTER_SATURATION: f32 = 10.0;

/// Score the structural richness of the map's inputs.
///
/// Structure contributes 40%, keyword density 30%, cluster cohesion 30%.
/// The structure component starts at 0.5, moves to 0.8 when at least one
/// heading was detected, and to 0.9 when more than three sections were
/// found; the section rule is applied last and overrides the heading rule
/// rather than stacking with it.
pub fn confidence_score(
    structure: &DocumentStructure,
    keyword_count: usize,
    cluster_count: usize,
) -> u8 {
    let mut structure_score = 0.5_f32;
    if !structure.headings.is_empty() {
        structure_score = 0.8;
    }
    if structure.sections.len() > 3 {
        structure_score = 0.9;
    }

    let keyword_density = (keyword_count as f32 / KEYWORD_SATURATION).min(1.0);
    let cluster_cohesion = (cluster_count as f32 / CLUSTER_SATURATION).min(1.0);

    let confidence =
        100.0 * (0.4 * structure_score + 0.3 * keyword_density + 0.3 * cluster_cohesion);
    confidence.round() as u8
}
