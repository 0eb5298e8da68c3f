// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared deterministic test fixtures.

use crate::geometry::Point;
use crate::model::graph::{PipelineEdge, PipelineGraph, PipelineNode};
use crate::model::ids::{KindId, NodeId};
use crate::model::kind::{KindRegistry, KindRole, NodeKindDef};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("fixture node id")
}

fn kid(value: &str) -> KindId {
    KindId::new(value).expect("fixture kind id")
}

/// The photo-pipeline kind set used throughout the tests: one source, one
/// sink, two pass-through stages.
pub(crate) fn kind_registry() -> KindRegistry {
    KindRegistry::new([
        NodeKindDef::new(kid("capture"), "Capture", KindRole::Source).with_dimensions(224.0, 80.0),
        NodeKindDef::new(kid("file"), "File Output", KindRole::PassThrough)
            .with_dimensions(192.0, 80.0),
        NodeKindDef::new(kid("process"), "Process", KindRole::PassThrough)
            .with_dimensions(192.0, 80.0),
        NodeKindDef::new(kid("termination"), "Termination", KindRole::Sink)
            .with_dimensions(192.0, 80.0),
    ])
}

pub(crate) fn add_node_at(graph: &mut PipelineGraph, id: &str, kind: &str, x: f64, y: f64) {
    let node = PipelineNode::new(nid(id), kid(kind), Point::new(x, y));
    graph.nodes_mut().insert(nid(id), node);
}

pub(crate) fn add_node(graph: &mut PipelineGraph, id: &str, kind: &str) {
    add_node_at(graph, id, kind, 0.0, 0.0);
}

pub(crate) fn add_edge(graph: &mut PipelineGraph, from: &str, to: &str) {
    let edge = PipelineEdge::new(nid(from), nid(to));
    graph.edges_mut().insert(edge.key().clone(), edge);
}

/// capture → file → termination, stacked vertically.
pub(crate) fn chain_graph() -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    add_node_at(&mut graph, "capture", "capture", 0.0, 0.0);
    add_node_at(&mut graph, "file", "file", 0.0, 200.0);
    add_node_at(&mut graph, "termination", "termination", 0.0, 400.0);
    add_edge(&mut graph, "capture", "file");
    add_edge(&mut graph, "file", "termination");
    graph
}

/// a → b → c → a, all pass-through (no entry node).
pub(crate) fn cyclic_graph() -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    add_node_at(&mut graph, "a", "process", 0.0, 0.0);
    add_node_at(&mut graph, "b", "process", 0.0, 200.0);
    add_node_at(&mut graph, "c", "process", 0.0, 400.0);
    add_edge(&mut graph, "a", "b");
    add_edge(&mut graph, "b", "c");
    add_edge(&mut graph, "c", "a");
    graph
}

/// capture → file with co-aligned ports (source port x=112, target x=96).
pub(crate) fn aligned_pair_graph() -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    add_node_at(&mut graph, "capture", "capture", 0.0, 0.0);
    add_node_at(&mut graph, "file", "file", 0.0, 200.0);
    add_edge(&mut graph, "capture", "file");
    graph
}

/// capture → file with clearly offset ports (source x=112, target x=296).
pub(crate) fn offset_pair_graph() -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    add_node_at(&mut graph, "capture", "capture", 0.0, 0.0);
    add_node_at(&mut graph, "file", "file", 200.0, 200.0);
    add_edge(&mut graph, "capture", "file");
    graph
}
