// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use naiad::geometry::Point;
use naiad::model::{
    KindId, KindRegistry, KindRole, NodeId, NodeKindDef, PipelineEdge, PipelineGraph, PipelineNode,
};

pub fn kind_registry() -> KindRegistry {
    KindRegistry::new([
        NodeKindDef::new(kid("capture"), "Capture", KindRole::Source).with_dimensions(224.0, 80.0),
        NodeKindDef::new(kid("process"), "Process", KindRole::PassThrough)
            .with_dimensions(192.0, 80.0),
        NodeKindDef::new(kid("termination"), "Termination", KindRole::Sink)
            .with_dimensions(192.0, 80.0),
    ])
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("valid node id")
}

fn kid(value: &str) -> KindId {
    KindId::new(value).expect("valid kind id")
}

fn push_node(graph: &mut PipelineGraph, id: String, kind: &str, x: f64, y: f64) {
    let node_id = NodeId::new(id).expect("valid node id");
    let node = PipelineNode::new(node_id.clone(), kid(kind), Point::new(x, y));
    graph.nodes_mut().insert(node_id, node);
}

fn push_edge(graph: &mut PipelineGraph, from: String, to: String) {
    let edge = PipelineEdge::new(
        NodeId::new(from).expect("valid node id"),
        NodeId::new(to).expect("valid node id"),
    );
    graph.edges_mut().insert(edge.key().clone(), edge);
}

/// capture → process_0 → … → process_{n-1} → termination, unpositioned.
pub fn chain(stages: usize) -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    push_node(&mut graph, "capture".to_owned(), "capture", 0.0, 0.0);
    for idx in 0..stages {
        push_node(&mut graph, format!("process_{idx:03}"), "process", 0.0, 0.0);
    }
    push_node(&mut graph, "termination".to_owned(), "termination", 0.0, 0.0);

    let mut prev = "capture".to_owned();
    for idx in 0..stages {
        let next = format!("process_{idx:03}");
        push_edge(&mut graph, prev, next.clone());
        prev = next;
    }
    push_edge(&mut graph, prev, "termination".to_owned());
    graph
}

#[derive(Debug, Clone, Copy)]
pub struct DagParams {
    pub layers: usize,
    pub width: usize,
    pub fan_out: usize,
}

impl DagParams {
    pub fn new(layers: usize, width: usize, fan_out: usize) -> Self {
        Self { layers, width, fan_out }
    }
}

fn dag_node_name(layer: usize, slot: usize) -> String {
    format!("n_{layer:03}_{slot:03}")
}

/// A dense layered pipeline: one capture feeding `width` parallel columns
/// over `layers` layers, each node fanning out to `fan_out` nodes of the
/// next layer (wrapping), all draining into one termination.
pub fn dag(params: DagParams) -> PipelineGraph {
    let mut graph = PipelineGraph::default();
    push_node(&mut graph, "capture".to_owned(), "capture", 0.0, 0.0);
    push_node(&mut graph, "termination".to_owned(), "termination", 0.0, 0.0);

    for layer in 0..params.layers {
        for slot in 0..params.width {
            push_node(&mut graph, dag_node_name(layer, slot), "process", 0.0, 0.0);
        }
    }

    for slot in 0..params.width {
        push_edge(&mut graph, "capture".to_owned(), dag_node_name(0, slot));
    }
    for layer in 0..params.layers.saturating_sub(1) {
        for slot in 0..params.width {
            for offset in 0..params.fan_out {
                let target = (slot + offset) % params.width;
                push_edge(
                    &mut graph,
                    dag_node_name(layer, slot),
                    dag_node_name(layer + 1, target),
                );
            }
        }
    }
    if params.layers > 0 {
        for slot in 0..params.width {
            push_edge(
                &mut graph,
                dag_node_name(params.layers - 1, slot),
                "termination".to_owned(),
            );
        }
    }
    graph
}

/// A chain with every fourth edge reversed, so classification has real work.
pub fn tangled_chain(stages: usize) -> PipelineGraph {
    let mut graph = chain(stages);
    let keys: Vec<_> = graph.edges().keys().cloned().collect();
    for (idx, key) in keys.iter().enumerate() {
        if idx % 4 == 3 {
            graph.edges_mut().remove(key);
            push_edge(
                &mut graph,
                key.to().as_str().to_owned(),
                key.from().as_str().to_owned(),
            );
        }
    }
    graph
}

/// Deterministic port pairs spanning all path tiers.
pub fn port_pairs(count: usize) -> Vec<(Point, Point)> {
    (0..count)
        .map(|idx| {
            let i = idx as f64;
            let source = Point::new(100.0 + (idx % 7) as f64 * 31.0, 80.0 + i);
            // Every fifth pair is backward (target above the source).
            let target_y = if idx % 5 == 0 { source.y - 140.0 } else { source.y + 160.0 };
            let target = Point::new(60.0 + (idx % 11) as f64 * 23.0, target_y);
            (source, target)
        })
        .collect()
}

pub fn checksum_positions(positions: &std::collections::BTreeMap<NodeId, Point>) -> u64 {
    let mut acc = 0u64;
    for (node_id, position) in positions {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node_id.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(position.x.abs() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(position.y.abs() as u64);
    }
    acc
}
