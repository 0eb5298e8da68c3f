// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::{node_dimensions, Point};
use crate::model::graph::PipelineGraph;
use crate::model::ids::NodeId;
use crate::model::kind::KindRegistry;

use super::traversal::classify_edges;

/// Primary layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    TopBottom,
    LeftRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub direction: LayoutDirection,
    /// Gap between neighboring nodes within a rank.
    pub node_sep: f64,
    /// Gap between consecutive ranks.
    pub rank_sep: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::TopBottom,
            node_sep: 60.0,
            rank_sep: 60.0,
        }
    }
}

/// Deterministic Kahn topological order over the forward projection.
fn topo_order(
    nodes: &BTreeSet<&NodeId>,
    outgoing: &BTreeMap<&NodeId, Vec<&NodeId>>,
) -> Vec<NodeId> {
    let mut indegree = BTreeMap::<&NodeId, usize>::new();
    for node_id in nodes.iter() {
        indegree.insert(*node_id, 0);
    }
    for targets in outgoing.values() {
        for target in targets {
            if let Some(degree) = indegree.get_mut(target) {
                *degree += 1;
            }
        }
    }

    let mut ready = indegree
        .iter()
        .filter_map(|(node_id, degree)| (*degree == 0).then(|| (**node_id).clone()))
        .collect::<BTreeSet<NodeId>>();

    let mut topo = Vec::<NodeId>::with_capacity(nodes.len());
    while let Some(next) = ready.iter().next().cloned() {
        ready.remove(&next);
        let targets = outgoing.get(&next).map(Vec::as_slice).unwrap_or(&[]);
        for target in targets {
            if let Some(degree) = indegree.get_mut(*target) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    ready.insert((*target).clone());
                }
            }
        }
        topo.push(next);
    }

    // The forward projection is acyclic by construction, so this only fires
    // on internal inconsistency; fail open with a deterministic order.
    if topo.len() != nodes.len() {
        let placed = topo.iter().collect::<BTreeSet<_>>();
        let mut rest = nodes
            .iter()
            .filter(|node_id| !placed.contains(*node_id))
            .map(|node_id| (*node_id).clone())
            .collect::<Vec<_>>();
        topo.append(&mut rest);
    }

    topo
}

/// Longest-path layering over a topological order.
fn assign_ranks(
    topo: &[NodeId],
    outgoing: &BTreeMap<&NodeId, Vec<&NodeId>>,
) -> BTreeMap<NodeId, usize> {
    let mut ranks = BTreeMap::<NodeId, usize>::new();
    for node_id in topo {
        ranks.entry(node_id.clone()).or_insert(0);
    }

    for from in topo {
        let from_rank = *ranks.get(from).unwrap_or(&0);
        let targets = outgoing.get(from).map(Vec::as_slice).unwrap_or(&[]);
        for target in targets {
            let target_rank = ranks.get(*target).copied().unwrap_or(0);
            ranks.insert((*target).clone(), target_rank.max(from_rank + 1));
        }
    }

    ranks
}

fn sort_rank_by_barycenter(
    rank_nodes: &mut [NodeId],
    prev_positions: &BTreeMap<NodeId, usize>,
    predecessors: &BTreeMap<&NodeId, Vec<&NodeId>>,
) {
    let barycenter = |node_id: &NodeId| -> Option<(usize, usize)> {
        let preds = predecessors.get(node_id)?;
        let (sum, count) = preds
            .iter()
            .filter_map(|p| prev_positions.get(*p).copied())
            .fold((0usize, 0usize), |(sum, count), pos| (sum + pos, count + 1));
        (count > 0).then_some((sum, count))
    };

    rank_nodes.sort_by(|a, b| match (barycenter(a), barycenter(b)) {
        (None, None) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (Some((sum_a, count_a)), Some((sum_b, count_b))) => {
            // Compare sum_a/count_a vs sum_b/count_b without floats.
            let left = (sum_a as u128) * (count_b as u128);
            let right = (sum_b as u128) * (count_a as u128);
            left.cmp(&right).then_with(|| a.cmp(b))
        }
    });
}

/// Computes an absolute top-left position for every node of the graph.
///
/// Back-edges are excluded (the graph may be cyclic), ranks are assigned by
/// longest path over the acyclic projection, rank order gets one downward
/// barycenter sweep, and coordinates come from per-node dimensions plus the
/// configured separations. Nodes of cyclic-only or disconnected subgraphs are
/// covered too; the edges themselves are drawn later against these positions.
pub fn layout_graph(
    graph: &PipelineGraph,
    kinds: &KindRegistry,
    config: &LayoutConfig,
) -> BTreeMap<NodeId, Point> {
    if graph.nodes().is_empty() {
        return BTreeMap::new();
    }

    let entry = graph.entry_node(kinds);
    let classes = classify_edges(graph, entry);

    let node_set = graph.nodes().keys().collect::<BTreeSet<_>>();
    let mut outgoing = BTreeMap::<&NodeId, Vec<&NodeId>>::new();
    let mut predecessors = BTreeMap::<&NodeId, Vec<&NodeId>>::new();
    for node_id in graph.nodes().keys() {
        outgoing.insert(node_id, Vec::new());
        predecessors.insert(node_id, Vec::new());
    }
    for key in classes.forward_keys(graph) {
        let (Some(from), Some(to)) = (node_set.get(key.from()), node_set.get(key.to())) else {
            continue;
        };
        if let Some(targets) = outgoing.get_mut(*from) {
            targets.push(*to);
        }
        if let Some(preds) = predecessors.get_mut(*to) {
            preds.push(*from);
        }
    }
    for targets in outgoing.values_mut() {
        targets.sort();
    }
    for preds in predecessors.values_mut() {
        preds.sort();
    }

    let topo = topo_order(&node_set, &outgoing);
    let node_ranks = assign_ranks(&topo, &outgoing);

    let max_rank = node_ranks.values().copied().max().unwrap_or(0);
    let mut ranks = vec![Vec::<NodeId>::new(); max_rank + 1];
    for node_id in graph.nodes().keys() {
        let rank = *node_ranks.get(node_id).unwrap_or(&0);
        ranks[rank].push(node_id.clone());
    }
    for rank_nodes in ranks.iter_mut() {
        rank_nodes.sort();
    }

    for rank_idx in 1..ranks.len() {
        let prev_positions = ranks[rank_idx - 1]
            .iter()
            .enumerate()
            .map(|(idx, node_id)| (node_id.clone(), idx))
            .collect::<BTreeMap<_, _>>();
        sort_rank_by_barycenter(&mut ranks[rank_idx], &prev_positions, &predecessors);
    }

    // Extents along the primary (rank) and cross axes, per direction.
    let extents = graph
        .nodes()
        .values()
        .map(|node| {
            let size = node_dimensions(node, kinds);
            let (main, cross) = match config.direction {
                LayoutDirection::TopBottom => (size.height, size.width),
                LayoutDirection::LeftRight => (size.width, size.height),
            };
            (node.node_id().clone(), (main, cross))
        })
        .collect::<BTreeMap<_, _>>();

    let rank_extent = |rank_nodes: &[NodeId]| -> f64 {
        rank_nodes
            .iter()
            .filter_map(|node_id| extents.get(node_id))
            .map(|(main, _)| *main)
            .fold(0.0f64, f64::max)
    };
    let rank_breadth = |rank_nodes: &[NodeId]| -> f64 {
        let total: f64 = rank_nodes
            .iter()
            .filter_map(|node_id| extents.get(node_id))
            .map(|(_, cross)| *cross)
            .sum();
        total + config.node_sep * rank_nodes.len().saturating_sub(1) as f64
    };

    let widest = ranks.iter().map(|r| rank_breadth(r)).fold(0.0f64, f64::max);

    let mut positions = BTreeMap::<NodeId, Point>::new();
    let mut main_cursor = 0.0f64;
    for rank_nodes in &ranks {
        let extent = rank_extent(rank_nodes);
        let main_center = main_cursor + extent / 2.0;

        let mut cross_cursor = (widest - rank_breadth(rank_nodes)) / 2.0;
        for node_id in rank_nodes {
            let Some((main, cross)) = extents.get(node_id).copied() else {
                continue;
            };
            let cross_center = cross_cursor + cross / 2.0;
            // Engine output is node centers; emit the top-left corner.
            let point = match config.direction {
                LayoutDirection::TopBottom => {
                    Point::new(cross_center - cross / 2.0, main_center - main / 2.0)
                }
                LayoutDirection::LeftRight => {
                    Point::new(main_center - main / 2.0, cross_center - cross / 2.0)
                }
            };
            positions.insert(node_id.clone(), point);
            cross_cursor += cross + config.node_sep;
        }

        main_cursor += extent + config.rank_sep;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::{layout_graph, LayoutConfig, LayoutDirection};
    use crate::model::fixtures;
    use crate::model::ids::NodeId;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn chain_orders_ranks_top_to_bottom() {
        let kinds = fixtures::kind_registry();
        let graph = fixtures::chain_graph();
        let positions = layout_graph(&graph, &kinds, &LayoutConfig::default());

        assert_eq!(positions.len(), 3);
        let capture = positions[&nid("capture")];
        let file = positions[&nid("file")];
        let termination = positions[&nid("termination")];
        assert!(file.y > capture.y);
        assert!(termination.y > file.y);
    }

    #[test]
    fn left_right_direction_advances_x_instead() {
        let kinds = fixtures::kind_registry();
        let graph = fixtures::chain_graph();
        let config = LayoutConfig { direction: LayoutDirection::LeftRight, ..Default::default() };
        let positions = layout_graph(&graph, &kinds, &config);

        assert!(positions[&nid("termination")].x > positions[&nid("capture")].x);
    }

    #[test]
    fn cyclic_graph_positions_every_node() {
        let kinds = fixtures::kind_registry();
        let graph = fixtures::cyclic_graph();
        let positions = layout_graph(&graph, &kinds, &LayoutConfig::default());

        assert_eq!(positions.len(), graph.nodes().len());
        // With the back-edge excluded, a→b→c still stacks downward.
        assert!(positions[&nid("b")].y > positions[&nid("a")].y);
        assert!(positions[&nid("c")].y > positions[&nid("b")].y);
    }

    #[test]
    fn disconnected_nodes_are_still_placed() {
        let kinds = fixtures::kind_registry();
        let mut graph = fixtures::chain_graph();
        fixtures::add_node(&mut graph, "island", "process");

        let positions = layout_graph(&graph, &kinds, &LayoutConfig::default());
        assert!(positions.contains_key(&nid("island")));
    }

    #[test]
    fn empty_graph_yields_empty_result() {
        let kinds = fixtures::kind_registry();
        let graph = crate::model::graph::PipelineGraph::default();
        assert!(layout_graph(&graph, &kinds, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn siblings_within_a_rank_do_not_overlap() {
        let kinds = fixtures::kind_registry();
        let mut graph = fixtures::chain_graph();
        fixtures::add_node(&mut graph, "filter", "process");
        fixtures::add_edge(&mut graph, "capture", "filter");
        fixtures::add_edge(&mut graph, "filter", "termination");

        let positions = layout_graph(&graph, &kinds, &LayoutConfig::default());
        let file = positions[&nid("file")];
        let filter = positions[&nid("filter")];
        assert_eq!(file.y, filter.y);
        assert!((file.x - filter.x).abs() >= 192.0);
    }
}
