// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry primitives, the edge-path engine and the drag-handle projector.
//!
//! Everything in this module is pure and rendering-framework independent:
//! paths come out as point lists / path commands, ports are plain functions
//! over node dimensions.

pub mod edge_path;
pub mod handles;

use crate::model::graph::PipelineNode;
use crate::model::kind::KindRegistry;

pub use edge_path::{
    compute_edge_config, rounded_path, EdgeConfig, EdgeTier, PathCommand, CORNER_RADIUS,
    LOOP_CLEARANCE, LOOP_PAD, SNAP_THRESHOLD,
};
pub use handles::{project_handles, DragAxis, EdgeHandle};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Effective dimensions of a node: the measured size when the shell supplied
/// one, else the kind's declared defaults.
pub fn node_dimensions(node: &PipelineNode, kinds: &KindRegistry) -> Size {
    if let Some(size) = node.size() {
        return size;
    }
    match kinds.get(node.kind()) {
        Some(def) => Size::new(def.width(), def.height()),
        None => Size::new(
            crate::model::kind::DEFAULT_NODE_WIDTH,
            crate::model::kind::DEFAULT_NODE_HEIGHT,
        ),
    }
}

/// Outgoing port: bottom-center of the node box.
pub fn source_port(node: &PipelineNode, kinds: &KindRegistry) -> Point {
    let size = node_dimensions(node, kinds);
    Point::new(node.position().x + size.width / 2.0, node.position().y + size.height)
}

/// Incoming port: top-center of the node box.
pub fn target_port(node: &PipelineNode, kinds: &KindRegistry) -> Point {
    let size = node_dimensions(node, kinds);
    Point::new(node.position().x + size.width / 2.0, node.position().y)
}
