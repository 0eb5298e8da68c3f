// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::graph::PipelineGraph;
use crate::model::ids::{EdgeKey, NodeId};

/// Result of depth-first edge classification.
///
/// Back-edges close cycles: their target is on the traversal path at the
/// moment the edge is examined. Everything else is a forward edge, and the
/// forward set is always acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeClassification {
    back_edges: BTreeSet<EdgeKey>,
}

impl EdgeClassification {
    pub fn back_edges(&self) -> &BTreeSet<EdgeKey> {
        &self.back_edges
    }

    pub fn is_back_edge(&self, key: &EdgeKey) -> bool {
        self.back_edges.contains(key)
    }

    /// Keys of the acyclic forward projection, in key order.
    pub fn forward_keys(&self, graph: &PipelineGraph) -> Vec<EdgeKey> {
        graph
            .edges()
            .keys()
            .filter(|key| !self.back_edges.contains(*key))
            .cloned()
            .collect()
    }
}

/// Classifies every edge of the graph as forward or back (cycle-closing).
///
/// Traversal starts at `entry` when given, then restarts from every still
/// unvisited node in id order, so disconnected subgraphs are covered and the
/// classification is total. The walk is an explicit-stack DFS, so graph depth
/// is bounded only by memory.
pub fn classify_edges(graph: &PipelineGraph, entry: Option<&NodeId>) -> EdgeClassification {
    let mut outgoing = BTreeMap::<&NodeId, Vec<&EdgeKey>>::new();
    for node_id in graph.nodes().keys() {
        outgoing.insert(node_id, Vec::new());
    }
    for key in graph.edges().keys() {
        if graph.nodes().contains_key(key.to()) {
            if let Some(targets) = outgoing.get_mut(key.from()) {
                targets.push(key);
            }
        }
    }

    let mut roots = Vec::<&NodeId>::new();
    if let Some(entry) = entry {
        if graph.nodes().contains_key(entry) {
            roots.push(entry);
        }
    }
    roots.extend(graph.nodes().keys());

    let mut back_edges = BTreeSet::<EdgeKey>::new();
    let mut visited = BTreeSet::<&NodeId>::new();
    let mut on_path = BTreeSet::<&NodeId>::new();
    // (node, index of the next outgoing edge to examine)
    let mut stack = Vec::<(&NodeId, usize)>::new();

    for root in roots {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        on_path.insert(root);
        stack.push((root, 0));

        while let Some((node, cursor)) = stack.last_mut() {
            let targets = outgoing.get(node).map(Vec::as_slice).unwrap_or(&[]);
            let Some(key) = targets.get(*cursor) else {
                on_path.remove(*node);
                stack.pop();
                continue;
            };
            *cursor += 1;

            let target = key.to();
            if on_path.contains(target) {
                back_edges.insert((*key).clone());
            } else if visited.insert(target) {
                on_path.insert(target);
                stack.push((target, 0));
            }
        }
    }

    EdgeClassification { back_edges }
}
