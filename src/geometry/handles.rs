// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::edge_path::{EdgeConfig, EdgeTier};
use super::Point;

/// Axis a handle may be dragged along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

/// A draggable mid-segment control point of an edge path.
///
/// `slot` identifies which stored waypoint pair the handle controls: 0 and 2
/// are the horizontal runs (vertical drag), 1 is the middle vertical
/// (horizontal drag). Direct and one-bend edges expose a single slot-0
/// handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHandle {
    position: Point,
    axis: DragAxis,
    slot: u8,
}

impl EdgeHandle {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn axis(&self) -> DragAxis {
        self.axis
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Derives the draggable handles for an edge's current geometry.
pub fn project_handles(config: &EdgeConfig) -> SmallVec<[EdgeHandle; 3]> {
    let points = config.points();
    let mut handles = SmallVec::new();

    match config.tier() {
        EdgeTier::Direct => {
            let (a, b) = (points[0], points[1]);
            // Perpendicular to the segment: a vertical direct edge is
            // reshaped by dragging sideways.
            let axis = if (b.x - a.x).abs() <= (b.y - a.y).abs() {
                DragAxis::Horizontal
            } else {
                DragAxis::Vertical
            };
            handles.push(EdgeHandle { position: midpoint(a, b), axis, slot: 0 });
        }
        EdgeTier::OneBend => {
            // The horizontal run sits between the two interior points.
            handles.push(EdgeHandle {
                position: midpoint(points[1], points[2]),
                axis: DragAxis::Vertical,
                slot: 0,
            });
        }
        EdgeTier::ThreeBend | EdgeTier::Loop => {
            // Segments 2, 3 and 4 of the 5-segment path.
            for (slot, axis) in [DragAxis::Vertical, DragAxis::Horizontal, DragAxis::Vertical]
                .into_iter()
                .enumerate()
            {
                handles.push(EdgeHandle {
                    position: midpoint(points[slot + 1], points[slot + 2]),
                    axis,
                    slot: slot as u8,
                });
            }
        }
    }

    handles
}
