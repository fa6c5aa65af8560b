//! Serialized mind-map model
//!
//! The final artifact consumed by the rendering frontend: nodes with
//! positions, parent edges, a confidence score, and a metadata block.
//! Field names serialize in camelCase to match the wire format the
//! frontend expects.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::hierarchy::{HierarchyNode, NodeKind};
use crate::layout::Position;

/// Method tag recorded in metadata for provenance
pub const GENERATION_METHOD: &str = "statistical-nlp";

/// Node payload holding the display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

/// A positioned node in the output graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapNode {
    pub id: String,
    pub data: NodeData,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub level: u8,
    pub position: Position,
}

/// A parent edge; label is always empty in the current format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Generation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMetadata {
    /// ISO-8601 timestamp of generation
    pub generated_at: String,
    /// Always [`GENERATION_METHOD`] for this pipeline
    pub method: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Complete mind map; immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMap {
    pub nodes: Vec<MapNode>,
    pub edges: Vec<MapEdge>,
    pub confidence: u8,
    pub metadata: MapMetadata,
}

/// Assemble the final artifact from hierarchy nodes and their positions.
///
/// Nodes keep hierarchy order (root, mains, subs); every non-root node
/// contributes exactly one edge `e_<parentId>_<nodeId>` to its parent.
pub fn assemble(
    hierarchy: &[HierarchyNode],
    positions: &AHashMap<String, Position>,
    confidence: u8,
) -> MindMap {
    let mut nodes = Vec::with_capacity(hierarchy.len());
    let mut edges = Vec::new();

    for node in hierarchy {
        let position = positions
            .get(&node.id)
            .copied()
            .unwrap_or(Position { x: 0.0, y: 0.0 });

        nodes.push(MapNode {
            id: node.id.clone(),
            data: NodeData {
                label: node.label.clone(),
            },
            kind: node.kind,
            level: node.level,
            position,
        });

        if let Some(parent) = &node.parent {
            edges.push(MapEdge {
                id: format!("e_{}_{}", parent, node.id),
                source: parent.clone(),
                target: node.id.clone(),
                label: String::new(),
            });
        }
    }

    let metadata = MapMetadata {
        generated_at: chrono::Utc::now().to_rfc3339(),
        method: GENERATION_METHOD.to_string(),
        node_count: nodes.len(),
        edge_count: edges.len(),
    };

    MindMap {
        nodes,
        edges,
        confidence,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy() -> Vec<HierarchyNode> {
        vec![
            HierarchyNode {
                id: "root".to_string(),
                label: "Overview".to_string(),
                kind: NodeKind::Root,
                level: 0,
                parent: None,
                cluster: None,
            },
            HierarchyNode {
                id: "main_0".to_string(),
                label: "Routing".to_string(),
                kind: NodeKind::Main,
                level: 1,
                parent: Some("root".to_string()),
                cluster: Some(0),
            },
            HierarchyNode {
                id: "sub_0".to_string(),
                label: "Tables".to_string(),
                kind: NodeKind::Sub,
                level: 2,
                parent: Some("main_0".to_string()),
                cluster: Some(1),
            },
        ]
    }

    fn positions() -> AHashMap<String, Position> {
        let mut map = AHashMap::new();
        map.insert("root".to_string(), Position { x: 0.0, y: 0.0 });
        map.insert("main_0".to_string(), Position { x: 200.0, y: 0.0 });
        map.insert("sub_0".to_string(), Position { x: 350.0, y: 0.0 });
        map
    }

    #[test]
    fn test_assemble_counts() {
        let map = assemble(&hierarchy(), &positions(), 75);
        assert_eq!(map.nodes.len(), 3);
        assert_eq!(map.edges.len(), 2);
        assert_eq!(map.confidence, 75);
        assert_eq!(map.metadata.node_count, 3);
        assert_eq!(map.metadata.edge_count, 2);
        assert_eq!(map.metadata.method, GENERATION_METHOD);
    }

    #[test]
    fn test_edge_id_format() {
        let map = assemble(&hierarchy(), &positions(), 75);
        assert_eq!(map.edges[0].id, "e_root_main_0");
        assert_eq!(map.edges[1].id, "e_main_0_sub_0");
        for edge in &map.edges {
            assert!(edge.label.is_empty());
        }
    }

    #[test]
    fn test_edge_endpoints_reference_nodes() {
        let map = assemble(&hierarchy(), &positions(), 75);
        for edge in &map.edges {
            assert!(map.nodes.iter().any(|n| n.id == edge.source));
            assert!(map.nodes.iter().any(|n| n.id == edge.target));
        }
    }

    #[test]
    fn test_json_wire_format() {
        let map = assemble(&hierarchy(), &positions(), 60);
        let value = serde_json::to_value(&map).unwrap();

        assert_eq!(value["nodes"][0]["type"], "root");
        assert_eq!(value["nodes"][0]["data"]["label"], "Overview");
        assert_eq!(value["nodes"][1]["position"]["x"], 200.0);
        assert_eq!(value["confidence"], 60);
        assert!(value["metadata"]["generatedAt"].is_string());
        assert_eq!(value["metadata"]["nodeCount"], 3);
        assert_eq!(value["metadata"]["edgeCount"], 2);
    }

    #[test]
    fn test_missing_position_defaults_to_origin() {
        let map = assemble(&hierarchy(), &AHashMap::new(), 10);
        assert_eq!(map.nodes[1].position.x, 0.0);
        assert_eq!(map.nodes[1].position.y, 0.0);
    }
}
