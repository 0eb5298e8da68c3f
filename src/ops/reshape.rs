// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer-drag life cycle for reshaping a single edge.
//!
//! The session owns the drag state; the functions here perform the per-frame
//! waypoint mutation and the drag-end normalization. Geometry always flows
//! through [`compute_edge_config`], so the stored waypoints can never drift
//! from the tier rules.

use crate::geometry::{
    compute_edge_config, source_port, target_port, DragAxis, EdgeHandle, EdgeTier, Point,
};
use crate::model::graph::PipelineGraph;
use crate::model::ids::EdgeKey;
use crate::model::kind::KindRegistry;

/// An active reshape gesture on one edge handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ReshapeDrag {
    edge: EdgeKey,
    slot: u8,
    axis: DragAxis,
}

impl ReshapeDrag {
    pub fn new(edge: EdgeKey, handle: &EdgeHandle) -> Self {
        Self {
            edge,
            slot: handle.slot(),
            axis: handle.axis(),
        }
    }

    pub fn edge(&self) -> &EdgeKey {
        &self.edge
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn axis(&self) -> DragAxis {
        self.axis
    }
}

/// Current port positions of an edge's endpoints.
pub(crate) fn edge_ports(
    graph: &PipelineGraph,
    kinds: &KindRegistry,
    key: &EdgeKey,
) -> Option<(Point, Point)> {
    let from = graph.node(key.from())?;
    let to = graph.node(key.to())?;
    Some((source_port(from, kinds), target_port(to, kinds)))
}

/// Applies one pointer-move frame of a drag gesture.
///
/// Only the dragged coordinate component changes; interior x-endpoints are
/// re-pinned to the current ports every frame (the ports may move under the
/// gesture). A direct or default edge materializes full waypoint structure on
/// the first frame, seeded from its own default geometry. Returns `false` if
/// the edge or its endpoints vanished mid-gesture.
pub fn apply_drag(
    graph: &mut PipelineGraph,
    kinds: &KindRegistry,
    drag: &ReshapeDrag,
    pointer: Point,
) -> bool {
    let Some((source, target)) = edge_ports(graph, kinds, drag.edge()) else {
        return false;
    };
    let Some(edge) = graph.edge_mut(drag.edge()) else {
        return false;
    };

    let config = compute_edge_config(source, target, edge.waypoints());
    match config.tier() {
        EdgeTier::Direct => match drag.axis() {
            DragAxis::Horizontal => {
                // Materialize a (collapsed) three-bend detour at the pointer.
                let mid_y = (source.y + target.y) / 2.0;
                edge.set_waypoints([
                    Point::new(source.x, mid_y),
                    Point::new(pointer.x, mid_y),
                    Point::new(pointer.x, mid_y),
                    Point::new(target.x, mid_y),
                ]);
            }
            DragAxis::Vertical => {
                edge.set_waypoints([
                    Point::new(source.x, pointer.y),
                    Point::new(target.x, pointer.y),
                ]);
            }
        },
        EdgeTier::OneBend => {
            edge.set_waypoints([
                Point::new(source.x, pointer.y),
                Point::new(target.x, pointer.y),
            ]);
        }
        EdgeTier::ThreeBend | EdgeTier::Loop => {
            // Interior of the (possibly default-synthesized) 6-point path.
            let points = config.points();
            let mut wp = [points[1], points[2], points[3], points[4]];
            match drag.axis() {
                // The only horizontal handle is the middle vertical run; a
                // gesture that began on a direct edge lands here too once its
                // detour materializes.
                DragAxis::Horizontal => {
                    wp[1].x = pointer.x;
                    wp[2].x = pointer.x;
                }
                DragAxis::Vertical if drag.slot() == 0 => {
                    wp[0].y = pointer.y;
                    wp[1].y = pointer.y;
                }
                DragAxis::Vertical if drag.slot() == 2 => {
                    wp[2].y = pointer.y;
                    wp[3].y = pointer.y;
                }
                // Stale handle for this tier; drop the frame.
                DragAxis::Vertical => return false,
            }
            wp[0].x = source.x;
            wp[3].x = target.x;
            edge.set_waypoints(wp);
        }
    }

    true
}

/// Re-derives an edge's waypoints against the current ports and stores the
/// normalized set. A geometry that resolved to a simpler tier loses its
/// waypoints entirely (snap-back). Used at drag end and whenever an endpoint
/// node moves.
pub fn normalize_edge(graph: &mut PipelineGraph, kinds: &KindRegistry, key: &EdgeKey) {
    let Some((source, target)) = edge_ports(graph, kinds, key) else {
        return;
    };
    let Some(edge) = graph.edge_mut(key) else {
        return;
    };

    let config = compute_edge_config(source, target, edge.waypoints());
    edge.set_waypoints(config.effective_waypoints().iter().copied());
}
