//! Radial node layout
//!
//! Root at the origin, main nodes evenly spaced on a circle around it,
//! sub-nodes on smaller circles around their parents. The only
//! non-deterministic path in the whole pipeline is the missing-parent
//! fallback jitter, so the random source is injected and seeded by the
//! caller rather than drawn from ambient state.

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::hierarchy::{HierarchyNode, NodeKind};

/// 2D canvas position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Compute positions for every hierarchy node.
///
/// Main nodes sit at `2π·i / main_count` on a circle of `main_radius`
/// around the origin; sub-nodes sit at `2π·i / sibling_count` on a circle
/// of `sub_radius` around their own parent, where `i` counts siblings
/// under that parent. A sub-node whose parent has no position falls back
/// to a fixed horizontal offset with vertical jitter from `rng`.
pub fn compute_layout(
    nodes: &[HierarchyNode],
    main_radius: f32,
    sub_radius: f32,
    rng: &mut StdRng,
) -> AHashMap<String, Position> {
    let mut positions: AHashMap<String, Position> = AHashMap::new();

    positions.insert("root".to_string(), Position { x: 0.0, y: 0.0 });

    let mains: Vec<&HierarchyNode> = nodes.iter().filter(|n| n.kind == NodeKind::Main).collect();
    for (index, node) in mains.iter().enumerate() {
        let angle = TAU * index as f32 / mains.len() as f32;
        positions.insert(
            node.id.clone(),
            Position {
                x: angle.cos() * main_radius,
                y: angle.sin() * main_radius,
            },
        );
    }

    let subs: Vec<&HierarchyNode> = nodes.iter().filter(|n| n.kind == NodeKind::Sub).collect();

    // Sibling counts per parent, so each parent's children share one circle
    let mut sibling_totals: AHashMap<&str, usize> = AHashMap::new();
    for node in &subs {
        if let Some(parent) = node.parent.as_deref() {
            *sibling_totals.entry(parent).or_insert(0) += 1;
        }
    }

    let mut sibling_seen: AHashMap<&str, usize> = AHashMap::new();
    for node in &subs {
        let parent = node.parent.as_deref().unwrap_or("root");
        let position = match positions.get(parent).copied() {
            Some(parent_pos) => {
                let total = sibling_totals.get(parent).copied().unwrap_or(1);
                let index = sibling_seen.entry(parent).or_insert(0);
                let angle = TAU * *index as f32 / total as f32;
                *index += 1;
                Position {
                    x: parent_pos.x + angle.cos() * sub_radius,
                    y: parent_pos.y + angle.sin() * sub_radius,
                }
            }
            None => Position {
                x: main_radius * 2.0,
                y: rng.gen_range(0.0..sub_radius * 2.0),
            },
        };
        positions.insert(node.id.clone(), position);
    }

    positions
}
