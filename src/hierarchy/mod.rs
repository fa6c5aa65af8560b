//! Hierarchy assembly
//!
//! Builds the 3-level tree rendered by the frontend: one root, up to 8 main
//! concept nodes, up to 7 sub-concept nodes. The hard cap keeps the drawn
//! graph readable regardless of document size.

mod confidence;

pub use confidence::confidence_score;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::clustering::{jaccard, label_cluster, title_case, Cluster};
use crate::extraction::Keyword;
use crate::structure::DocumentStructure;

/// Root label used when the document yields neither headings nor keywords
const FALLBACK_ROOT_LABEL: &str = "Document";

/// Node role within the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Main,
    Sub,
}

/// A node in the 3-level concept tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Unique id within one mind map (`root`, `main_<i>`, `sub_<i>`)
    pub id: String,
    /// Display label
    pub label: String,
    pub kind: NodeKind,
    /// 0 for root, 1 for main, 2 for sub
    pub level: u8,
    /// Parent id; `None` only for the root
    pub parent: Option<String>,
    /// Index of the backing cluster, for main and sub nodes
    pub cluster: Option<usize>,
}

/// Assembles hierarchy nodes from detected structure and labeled clusters
pub struct HierarchyBuilder {
    max_main_nodes: usize,
    max_sub_nodes: usize,
}

impl HierarchyBuilder {
    pub fn new(max_main_nodes: usize, max_sub_nodes: usize) -> Self {
        Self {
            max_main_nodes,
            max_sub_nodes,
        }
    }

    /// Build the tree in root, main, sub order.
    ///
    /// The root takes the first detected heading's text, falling back to the
    /// top three keywords joined with `" & "`. The first `max_main_nodes`
    /// clusters become main nodes; the following `max_sub_nodes` clusters
    /// become sub-nodes, each parented to the main node whose keyword set it
    /// most resembles.
    pub fn build(
        &self,
        structure: &DocumentStructure,
        clusters: &[Cluster],
        keywords: &[Keyword],
    ) -> Vec<HierarchyNode> {
        let mut nodes = Vec::with_capacity(1 + clusters.len().min(self.max_main_nodes + self.max_sub_nodes));

        nodes.push(HierarchyNode {
            id: "root".to_string(),
            label: self.root_label(structure, keywords),
            kind: NodeKind::Root,
            level: 0,
            parent: None,
            cluster: None,
        });

        let main_clusters: Vec<(usize, &Cluster)> = clusters
            .iter()
            .enumerate()
            .take(self.max_main_nodes)
            .collect();

        for (position, (cluster_index, cluster)) in main_clusters.iter().enumerate() {
            nodes.push(HierarchyNode {
                id: format!("main_{position}"),
                label: label_cluster(cluster),
                kind: NodeKind::Main,
                level: 1,
                parent: Some("root".to_string()),
                cluster: Some(*cluster_index),
            });
        }

        let sub_clusters = clusters
            .iter()
            .enumerate()
            .skip(self.max_main_nodes)
            .take(self.max_sub_nodes);

        for (position, (cluster_index, cluster)) in sub_clusters.enumerate() {
            let parent = self
                .closest_main(cluster, &main_clusters)
                .unwrap_or_else(|| {
                    if main_clusters.is_empty() {
                        "root".to_string()
                    } else {
                        "main_0".to_string()
                    }
                });

            nodes.push(HierarchyNode {
                id: format!("sub_{position}"),
                label: label_cluster(cluster),
                kind: NodeKind::Sub,
                level: 2,
                parent: Some(parent),
                cluster: Some(cluster_index),
            });
        }

        nodes
    }

    fn root_label(&self, structure: &DocumentStructure, keywords: &[Keyword]) -> String {
        if let Some(heading) = structure.headings.first() {
            return heading.text.clone();
        }
        if keywords.is_empty() {
            return FALLBACK_ROOT_LABEL.to_string();
        }
        keywords
            .iter()
            .take(3)
            .map(|k| title_case(&k.term))
            .collect::<Vec<_>>()
            .join(" & ")
    }

    /// Main node id with the highest keyword-set Jaccard similarity, when
    /// any similarity is positive
    fn closest_main(&self, cluster: &Cluster, mains: &[(usize, &Cluster)]) -> Option<String> {
        let stems: AHashSet<String> = cluster.keywords.iter().map(|k| k.stem.clone()).collect();

        let mut best: Option<(usize, f32)> = None;
        for (position, (_, main)) in mains.iter().enumerate() {
            let main_stems: AHashSet<String> =
                main.keywords.iter().map(|k| k.stem.clone()).collect();
            let sim = jaccard(&stems, &main_stems);
            if best.map_or(true, |(_, s)| sim > s) {
                best = Some((position, sim));
            }
        }

        best.filter(|(_, sim)| *sim > 0.0)
            .map(|(position, _)| format!("main_{position}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Heading;

    fn keyword(term: &str, score: f32) -> Keyword {
        Keyword {
            term: term.to_string(),
            stem: term.to_string(),
            score,
            tf: 0.1,
            doc_freq: 1,
        }
    }

    fn cluster(id: usize, terms: &[&str]) -> Cluster {
        Cluster {
            id,
            keywords: terms
                .iter()
                .enumerate()
                .map(|(i, t)| keyword(t, 1.0 - i as f32 * 0.1))
                .collect(),
            keyphrases: Vec::new(),
        }
    }

    fn structure_with_heading(text: &str) -> DocumentStructure {
        DocumentStructure {
            headings: vec![Heading {
                text: text.to_string(),
                level: 1,
                line_index: 0,
            }],
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_root_label_from_heading() {
        let builder = HierarchyBuilder::new(8, 7);
        let nodes = builder.build(&structure_with_heading("NETWORK PROTOCOLS"), &[], &[]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "NETWORK PROTOCOLS");
        assert_eq!(nodes[0].kind, NodeKind::Root);
        assert!(nodes[0].parent.is_none());
    }

    #[test]
    fn test_root_label_from_keywords() {
        let builder = HierarchyBuilder::new(8, 7);
        let keywords = vec![
            keyword("routing", 0.9),
            keyword("protocol", 0.8),
            keyword("packet", 0.7),
            keyword("ignored", 0.6),
        ];
        let nodes = builder.build(&DocumentStructure::default(), &[], &keywords);
        assert_eq!(nodes[0].label, "Routing & Protocol & Packet");
    }

    #[test]
    fn test_root_label_fallback() {
        let builder = HierarchyBuilder::new(8, 7);
        let nodes = builder.build(&DocumentStructure::default(), &[], &[]);
        assert_eq!(nodes[0].label, "Document");
    }

    #[test]
    fn test_main_node_cap() {
        let builder = HierarchyBuilder::new(8, 7);
        let clusters: Vec<Cluster> = (0..20)
            .map(|i| {
                let a = format!("term{i}");
                let b = format!("other{i}");
                cluster(i, &[a.as_str(), b.as_str()])
            })
            .collect();
        let nodes = builder.build(&DocumentStructure::default(), &clusters, &[]);

        let mains = nodes.iter().filter(|n| n.kind == NodeKind::Main).count();
        let subs = nodes.iter().filter(|n| n.kind == NodeKind::Sub).count();
        assert_eq!(mains, 8);
        assert_eq!(subs, 7);
        assert_eq!(nodes.len(), 16);
    }

    #[test]
    fn test_main_nodes_parented_to_root() {
        let builder = HierarchyBuilder::new(8, 7);
        let clusters = vec![cluster(0, &["alpha", "beta"]), cluster(1, &["gamma", "delta"])];
        let nodes = builder.build(&DocumentStructure::default(), &clusters, &[]);

        for node in nodes.iter().filter(|n| n.kind == NodeKind::Main) {
            assert_eq!(node.parent.as_deref(), Some("root"));
            assert_eq!(node.level, 1);
        }
    }

    #[test]
    fn test_sub_parent_by_jaccard() {
        let builder = HierarchyBuilder::new(2, 2);
        let clusters = vec![
            cluster(0, &["alpha", "beta"]),
            cluster(1, &["gamma", "delta"]),
            // Shares "gamma" with cluster 1: Jaccard 1/3 beats 0 for cluster 0
            cluster(2, &["gamma", "epsilon"]),
        ];
        let nodes = builder.build(&DocumentStructure::default(), &clusters, &[]);

        let sub = nodes.iter().find(|n| n.kind == NodeKind::Sub).unwrap();
        assert_eq!(sub.parent.as_deref(), Some("main_1"));
        assert_eq!(sub.level, 2);
    }

    #[test]
    fn test_sub_parent_fallback_to_first_main() {
        let builder = HierarchyBuilder::new(2, 2);
        let clusters = vec![
            cluster(0, &["alpha", "beta"]),
            cluster(1, &["gamma", "delta"]),
            cluster(2, &["unrelated", "terms"]),
        ];
        let nodes = builder.build(&DocumentStructure::default(), &clusters, &[]);

        let sub = nodes.iter().find(|n| n.kind == NodeKind::Sub).unwrap();
        assert_eq!(sub.parent.as_deref(), Some("main_0"));
    }

    #[test]
    fn test_ids_unique() {
        let builder = HierarchyBuilder::new(8, 7);
        let clusters: Vec<Cluster> = (0..12).map(|i| cluster(i, &["a", "b"])).collect();
        let nodes = builder.build(&DocumentStructure::default(), &clusters, &[]);

        let mut ids = AHashSet::new();
        for node in &nodes {
            assert!(ids.insert(node.id.clone()), "duplicate id {}", node.id);
        }
    }
}
