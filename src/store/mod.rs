// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persisted graph representation and the live↔persisted transforms.
//!
//! Hydration is fail-open: stale or foreign data (bad ids, unknown nodes,
//! malformed waypoint arrays) is skipped and counted rather than rejected, so
//! old documents keep loading. Emission is normalizing: waypoints are
//! re-derived through the geometry engine against current port positions, and
//! the deprecated `offset` field is accepted on read but never written.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{compute_edge_config, source_port, target_port, Point};
use crate::model::graph::{PipelineEdge, PipelineGraph, PipelineNode};
use crate::model::ids::{EdgeKey, KindId, NodeId};
use crate::model::kind::KindRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PersistedPoint {
    fn from(point: Point) -> Self {
        Self { x: point.x, y: point.y }
    }
}

impl From<PersistedPoint> for Point {
    fn from(point: PersistedPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedNode {
    pub id: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PersistedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEdge {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<PersistedPoint>>,
    /// Deprecated pre-waypoint curve parameter. Accepted on read so old
    /// documents load; never written back.
    #[serde(default, skip_serializing)]
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersistedGraph {
    #[serde(default)]
    pub nodes: Vec<PersistedNode>,
    #[serde(default)]
    pub edges: Vec<PersistedEdge>,
}

/// What hydration had to skip. All-zero for well-formed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HydrateReport {
    pub skipped_nodes: usize,
    pub skipped_edges: usize,
}

fn node_matches_error(node_id: &NodeId, validation_errors: &[String]) -> bool {
    let needle = node_id.as_str().to_lowercase();
    validation_errors
        .iter()
        .any(|message| message.to_lowercase().contains(&needle))
}

/// Hydrates persisted nodes. Position defaults to `(0,0)`; the per-node error
/// flag comes from case-insensitive substring-matching the node id against
/// the shell's validation messages.
pub fn to_live_nodes(
    nodes: &[PersistedNode],
    validation_errors: &[String],
    report: &mut HydrateReport,
) -> BTreeMap<NodeId, PipelineNode> {
    let mut live = BTreeMap::new();
    for persisted in nodes {
        let (Ok(node_id), Ok(kind)) = (
            NodeId::new(persisted.id.clone()),
            KindId::new(persisted.kind.clone()),
        ) else {
            report.skipped_nodes += 1;
            continue;
        };

        let position = persisted.position.map(Point::from).unwrap_or_default();
        let mut node = PipelineNode::new(node_id.clone(), kind, position);
        *node.properties_mut() = persisted.properties.clone();
        node.set_has_error(node_matches_error(&node_id, validation_errors));
        live.insert(node_id, node);
    }
    live
}

fn hydrate_waypoints(stored: &Option<Vec<PersistedPoint>>) -> SmallVec<[Point; 4]> {
    let Some(stored) = stored else {
        return SmallVec::new();
    };
    let points = stored.iter().copied().map(Point::from).collect::<SmallVec<[Point; 4]>>();
    match points.len() {
        2 | 4 if points.iter().all(Point::is_finite) => points,
        _ => SmallVec::new(),
    }
}

/// Hydrates persisted edges against an already hydrated node set. Edges with
/// unusable ids, missing endpoints or duplicate `(from,to)` pairs are
/// skipped; malformed waypoint arrays are dropped while the edge itself
/// survives.
pub fn to_live_edges(
    edges: &[PersistedEdge],
    nodes: &BTreeMap<NodeId, PipelineNode>,
    report: &mut HydrateReport,
) -> BTreeMap<EdgeKey, PipelineEdge> {
    let mut live = BTreeMap::new();
    for persisted in edges {
        let (Ok(from), Ok(to)) = (
            NodeId::new(persisted.from.clone()),
            NodeId::new(persisted.to.clone()),
        ) else {
            report.skipped_edges += 1;
            continue;
        };
        if !nodes.contains_key(&from) || !nodes.contains_key(&to) {
            report.skipped_edges += 1;
            continue;
        }

        let mut edge = PipelineEdge::new(from, to);
        edge.set_waypoints(hydrate_waypoints(&persisted.waypoints));
        let key = edge.key().clone();
        if live.insert(key, edge).is_some() {
            report.skipped_edges += 1;
        }
    }
    live
}

/// Full hydration of a persisted graph.
pub fn hydrate(
    persisted: &PersistedGraph,
    validation_errors: &[String],
) -> (PipelineGraph, HydrateReport) {
    let mut report = HydrateReport::default();
    let nodes = to_live_nodes(&persisted.nodes, validation_errors, &mut report);
    let edges = to_live_edges(&persisted.edges, &nodes, &mut report);

    let mut graph = PipelineGraph::default();
    *graph.nodes_mut() = nodes;
    *graph.edges_mut() = edges;
    (graph, report)
}

/// Emits nodes in id order; position is always present.
pub fn to_persisted_nodes(graph: &PipelineGraph) -> Vec<PersistedNode> {
    graph
        .nodes()
        .values()
        .map(|node| PersistedNode {
            id: node.node_id().as_str().to_owned(),
            kind: node.kind().as_str().to_owned(),
            properties: node.properties().clone(),
            position: Some(node.position().into()),
        })
        .collect()
}

/// Emits edges in key order.
///
/// With a kind registry available, each edge's waypoints are re-derived
/// through the geometry engine against the current ports, so stale detours
/// snap back before they are written. Without one (a caller serializing
/// without node context), stored waypoints pass through unchanged — a
/// reduced-fidelity fallback. Empty waypoint sets are omitted, and the legacy
/// `offset` never reappears.
pub fn to_persisted_edges(
    graph: &PipelineGraph,
    kinds: Option<&KindRegistry>,
) -> Vec<PersistedEdge> {
    graph
        .edges()
        .values()
        .map(|edge| {
            let waypoints: Vec<PersistedPoint> = match kinds {
                Some(kinds) => {
                    match (graph.node(edge.from()), graph.node(edge.to())) {
                        (Some(from), Some(to)) => {
                            let config = compute_edge_config(
                                source_port(from, kinds),
                                target_port(to, kinds),
                                edge.waypoints(),
                            );
                            config
                                .effective_waypoints()
                                .iter()
                                .copied()
                                .map(PersistedPoint::from)
                                .collect()
                        }
                        _ => edge.waypoints().iter().copied().map(PersistedPoint::from).collect(),
                    }
                }
                None => edge.waypoints().iter().copied().map(PersistedPoint::from).collect(),
            };

            PersistedEdge {
                from: edge.from().as_str().to_owned(),
                to: edge.to().as_str().to_owned(),
                waypoints: (!waypoints.is_empty()).then_some(waypoints),
                offset: 0.0,
            }
        })
        .collect()
}

pub fn to_persisted(graph: &PipelineGraph, kinds: Option<&KindRegistry>) -> PersistedGraph {
    PersistedGraph {
        nodes: to_persisted_nodes(graph),
        edges: to_persisted_edges(graph, kinds),
    }
}
