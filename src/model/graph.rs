// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::ids::{EdgeKey, KindId, NodeId};
use super::kind::{KindRegistry, KindRole};
use crate::geometry::{Point, Size};

/// A processing stage in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineNode {
    node_id: NodeId,
    kind: KindId,
    properties: BTreeMap<String, String>,
    position: Point,
    size: Option<Size>,
    has_error: bool,
}

impl PipelineNode {
    pub fn new(node_id: NodeId, kind: KindId, position: Point) -> Self {
        Self {
            node_id,
            kind,
            properties: BTreeMap::new(),
            position,
            size: None,
            has_error: false,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn kind(&self) -> &KindId {
        &self.kind
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.properties
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Measured dimensions reported by the shell, if any.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn set_size(&mut self, size: Option<Size>) {
        self.size = size;
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn set_has_error(&mut self, has_error: bool) {
        self.has_error = has_error;
    }
}

/// A connection between two pipeline stages.
///
/// `waypoints` holds 0, 2 or 4 stored points; the length selects the path
/// tier (see [`crate::geometry::compute_edge_config`]). Anything else is
/// treated as empty by the geometry engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineEdge {
    key: EdgeKey,
    waypoints: SmallVec<[Point; 4]>,
}

impl PipelineEdge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            key: EdgeKey::new(from, to),
            waypoints: SmallVec::new(),
        }
    }

    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn from(&self) -> &NodeId {
        self.key.from()
    }

    pub fn to(&self) -> &NodeId {
        self.key.to()
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn set_waypoints(&mut self, waypoints: impl IntoIterator<Item = Point>) {
        self.waypoints = waypoints.into_iter().collect();
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }
}

/// The live node/edge sets owned by an editor session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineGraph {
    nodes: BTreeMap<NodeId, PipelineNode>,
    edges: BTreeMap<EdgeKey, PipelineEdge>,
}

impl PipelineGraph {
    pub fn nodes(&self) -> &BTreeMap<NodeId, PipelineNode> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, PipelineNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeKey, PipelineEdge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeKey, PipelineEdge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&PipelineNode> {
        self.nodes.get(node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut PipelineNode> {
        self.nodes.get_mut(node_id)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&PipelineEdge> {
        self.edges.get(key)
    }

    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut PipelineEdge> {
        self.edges.get_mut(key)
    }

    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.edges
            .contains_key(&EdgeKey::new(from.clone(), to.clone()))
    }

    /// Keys of edges touching `node_id` on either endpoint, in key order.
    pub fn incident_edges(&self, node_id: &NodeId) -> Vec<EdgeKey> {
        self.edges
            .keys()
            .filter(|key| key.from() == node_id || key.to() == node_id)
            .cloned()
            .collect()
    }

    /// The designated entry node: the unique source-role node, if exactly one
    /// exists.
    pub fn entry_node(&self, kinds: &KindRegistry) -> Option<&NodeId> {
        let mut sources = self
            .nodes
            .values()
            .filter(|node| kinds.role_of(node.kind()) == KindRole::Source);
        let first = sources.next()?;
        if sources.next().is_some() {
            return None;
        }
        Some(first.node_id())
    }

    /// Whether any node carries a position other than the hydration default
    /// `(0,0)`. Used to decide on an initial auto-layout at load time.
    pub fn any_positioned(&self) -> bool {
        self.nodes
            .values()
            .any(|node| node.position() != Point::default())
    }
}
