// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use crate::geometry::{EdgeHandle, Point};
use crate::layout::{layout_graph, LayoutConfig};
use crate::model::graph::{PipelineEdge, PipelineGraph, PipelineNode};
use crate::model::ids::{EdgeKey, KindId, NodeId};
use crate::model::kind::KindRegistry;
use crate::ops::reshape::{apply_drag, normalize_edge, ReshapeDrag};
use crate::ops::{validate_connection, ConnectReject};
use crate::store::{self, HydrateReport, PersistedGraph};

/// A selectable object in the editor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Selection {
    Node(NodeId),
    Edge(EdgeKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NodeExists { node_id: NodeId },
    UnknownNode { node_id: NodeId },
    UnknownKind { kind: KindId },
    UnknownEdge { key: EdgeKey },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeExists { node_id } => write!(f, "node already exists (id={node_id})"),
            Self::UnknownNode { node_id } => write!(f, "node not found (id={node_id})"),
            Self::UnknownKind { kind } => write!(f, "node kind not registered ({kind})"),
            Self::UnknownEdge { key } => write!(f, "edge not found ({key})"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The editing session the shell runs against.
///
/// Owns the live graph plus transient UI state and routes every mutation
/// through the pure validator/geometry functions. All methods are synchronous
/// and run on the caller's thread.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    graph: PipelineGraph,
    kinds: KindRegistry,
    selection: BTreeSet<Selection>,
    dirty: bool,
    undo_stack: Vec<PipelineGraph>,
    redo_stack: Vec<PipelineGraph>,
    drag: Option<ReshapeDrag>,
}

impl EditorSession {
    pub fn new(kinds: KindRegistry) -> Self {
        Self {
            graph: PipelineGraph::default(),
            kinds,
            selection: BTreeSet::new(),
            dirty: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            drag: None,
        }
    }

    /// Hydrates a session from persisted storage. When no node carries a
    /// saved position, an initial auto-layout runs once; loading never marks
    /// the session dirty.
    pub fn load(
        persisted: &PersistedGraph,
        kinds: KindRegistry,
        validation_errors: &[String],
    ) -> (Self, HydrateReport) {
        let (graph, report) = store::hydrate(persisted, validation_errors);
        let mut session = Self {
            graph,
            kinds,
            selection: BTreeSet::new(),
            dirty: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            drag: None,
        };

        if !session.graph.nodes().is_empty() && !session.graph.any_positioned() {
            let positions = layout_graph(&session.graph, &session.kinds, &LayoutConfig::default());
            session.apply_positions(positions);
        }

        (session, report)
    }

    /// Emits the normalized persisted representation and clears the dirty
    /// flag.
    pub fn save(&mut self) -> PersistedGraph {
        let persisted = store::to_persisted(&self.graph, Some(&self.kinds));
        self.dirty = false;
        persisted
    }

    pub fn graph(&self) -> &PipelineGraph {
        &self.graph
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn selection(&self) -> &BTreeSet<Selection> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut BTreeSet<Selection> {
        &mut self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn push_undo(&mut self) {
        self.undo_stack.push(self.graph.clone());
        self.redo_stack.clear();
        self.dirty = true;
    }

    pub fn add_node(
        &mut self,
        node_id: NodeId,
        kind: KindId,
        position: Point,
    ) -> Result<(), SessionError> {
        if self.graph.nodes().contains_key(&node_id) {
            return Err(SessionError::NodeExists { node_id });
        }
        if !self.kinds.contains(&kind) {
            return Err(SessionError::UnknownKind { kind });
        }

        self.push_undo();
        let node = PipelineNode::new(node_id.clone(), kind, position);
        self.graph.nodes_mut().insert(node_id, node);
        Ok(())
    }

    /// Adds an edge after connection validation; the reject reason is
    /// returned for the shell to surface.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), ConnectReject> {
        if let Some(reject) = validate_connection(&from, &to, &self.graph, &self.kinds) {
            return Err(reject);
        }

        self.push_undo();
        let edge = PipelineEdge::new(from, to);
        self.graph.edges_mut().insert(edge.key().clone(), edge);
        Ok(())
    }

    /// Moves a node and re-normalizes the waypoints of every incident edge
    /// against the new port positions.
    pub fn move_node(&mut self, node_id: &NodeId, position: Point) -> Result<(), SessionError> {
        if !self.graph.nodes().contains_key(node_id) {
            return Err(SessionError::UnknownNode { node_id: node_id.clone() });
        }

        self.push_undo();
        if let Some(node) = self.graph.node_mut(node_id) {
            node.set_position(position);
        }
        for key in self.graph.incident_edges(node_id) {
            normalize_edge(&mut self.graph, &self.kinds, &key);
        }
        Ok(())
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Result<(), SessionError> {
        if !self.graph.nodes().contains_key(node_id) {
            return Err(SessionError::UnknownNode { node_id: node_id.clone() });
        }

        self.push_undo();
        for key in self.graph.incident_edges(node_id) {
            self.graph.edges_mut().remove(&key);
        }
        self.graph.nodes_mut().remove(node_id);
        self.selection.remove(&Selection::Node(node_id.clone()));
        Ok(())
    }

    pub fn remove_edge(&mut self, key: &EdgeKey) -> Result<(), SessionError> {
        if !self.graph.edges().contains_key(key) {
            return Err(SessionError::UnknownEdge { key: key.clone() });
        }

        self.push_undo();
        self.graph.edges_mut().remove(key);
        self.selection.remove(&Selection::Edge(key.clone()));
        Ok(())
    }

    /// Starts a reshape gesture on one of an edge's handles. A second
    /// pointer-down while a gesture is active is ignored. The undo snapshot
    /// is pushed here, once per gesture.
    pub fn begin_reshape(&mut self, key: &EdgeKey, handle: &EdgeHandle) -> bool {
        if self.drag.is_some() || self.graph.edge(key).is_none() {
            return false;
        }

        self.push_undo();
        self.drag = Some(ReshapeDrag::new(key.clone(), handle));
        true
    }

    /// One pointer-move frame of the active gesture; no-op when idle.
    pub fn update_reshape(&mut self, pointer: Point) {
        let Some(drag) = self.drag.clone() else {
            return;
        };
        apply_drag(&mut self.graph, &self.kinds, &drag, pointer);
    }

    /// Pointer-up: completes the gesture and snap-back-normalizes the edge.
    pub fn end_reshape(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        normalize_edge(&mut self.graph, &self.kinds, drag.edge());
        self.dirty = true;
    }

    /// Recomputes positions for the whole graph (manual "auto layout"
    /// action) and re-normalizes all edge waypoints.
    pub fn auto_layout(&mut self, config: &LayoutConfig) {
        if self.graph.nodes().is_empty() {
            return;
        }
        self.push_undo();
        let positions = layout_graph(&self.graph, &self.kinds, config);
        self.apply_positions(positions);
    }

    fn apply_positions(&mut self, positions: std::collections::BTreeMap<NodeId, Point>) {
        for (node_id, position) in positions {
            if let Some(node) = self.graph.node_mut(&node_id) {
                node.set_position(position);
            }
        }
        let keys = self.graph.edges().keys().cloned().collect::<Vec<_>>();
        for key in keys {
            normalize_edge(&mut self.graph, &self.kinds, &key);
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(prior) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(&mut self.graph, prior));
        self.dirty = true;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(&mut self.graph, next));
        self.dirty = true;
        true
    }
}
