// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::Point;

/// Ports whose x coordinates differ by less than this are co-aligned and the
/// edge can collapse to a straight vertical line.
pub const SNAP_THRESHOLD: f64 = 20.0;

/// Vertical clearance below the source / above the target for the default
/// loop geometry.
pub const LOOP_PAD: f64 = 40.0;

/// Horizontal clearance past the rightmost endpoint for the default loop
/// geometry's vertical run.
pub const LOOP_CLEARANCE: f64 = 60.0;

/// Corner radius for rounded path rendering.
pub const CORNER_RADIUS: f64 = 8.0;

/// Structural complexity class of an edge path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeTier {
    /// Straight segment between co-aligned ports.
    Direct,
    /// One horizontal run between two vertical stubs (3 segments).
    OneBend,
    /// Horizontal / vertical / horizontal interior (5 segments).
    ThreeBend,
    /// Backward edge routed below the source and above the target
    /// (5 segments).
    Loop,
}

/// Result of the edge geometry computation.
///
/// `points` is the full ordered polyline including both ports;
/// `effective_waypoints` is the normalized interior set to persist (empty for
/// default geometries that are recomputed from the ports alone).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig {
    tier: EdgeTier,
    points: SmallVec<[Point; 6]>,
    effective_waypoints: SmallVec<[Point; 4]>,
}

impl EdgeConfig {
    pub fn tier(&self) -> EdgeTier {
        self.tier
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn effective_waypoints(&self) -> &[Point] {
        &self.effective_waypoints
    }

    fn direct(source: Point, target: Point) -> Self {
        Self {
            tier: EdgeTier::Direct,
            points: SmallVec::from_slice(&[source, target]),
            effective_waypoints: SmallVec::new(),
        }
    }
}

/// Stored waypoint arrays are only meaningful at lengths 2 and 4 with finite
/// coordinates; anything else (stale or foreign data) falls open to the
/// recomputed default geometry.
fn sanitize_waypoints(stored: &[Point]) -> Option<&[Point]> {
    match stored.len() {
        2 | 4 if stored.iter().all(Point::is_finite) => Some(stored),
        _ => None,
    }
}

/// Reconstructs the 6-point path for a 4-waypoint edge, re-pinning the
/// interior x-endpoints to the current ports.
fn five_segment_config(tier: EdgeTier, source: Point, target: Point, wp: &[Point]) -> EdgeConfig {
    debug_assert_eq!(wp.len(), 4);
    let top_y = wp[0].y;
    let bottom_y = wp[3].y;
    let interior = [
        Point::new(source.x, top_y),
        Point::new(wp[1].x, top_y),
        Point::new(wp[2].x, bottom_y),
        Point::new(target.x, bottom_y),
    ];

    let mut points = SmallVec::new();
    points.push(source);
    points.extend_from_slice(&interior);
    points.push(target);

    EdgeConfig {
        tier,
        points,
        effective_waypoints: SmallVec::from_slice(&interior),
    }
}

fn one_bend_config(source: Point, target: Point, horizontal_y: f64, persist: bool) -> EdgeConfig {
    let bend = [
        Point::new(source.x, horizontal_y),
        Point::new(target.x, horizontal_y),
    ];
    EdgeConfig {
        tier: EdgeTier::OneBend,
        points: SmallVec::from_slice(&[source, bend[0], bend[1], target]),
        effective_waypoints: if persist {
            SmallVec::from_slice(&bend)
        } else {
            SmallVec::new()
        },
    }
}

/// Default loop geometry, synthesized from the ports alone: down below the
/// source, across past the rightmost endpoint, and back in above the target.
fn default_loop_config(source: Point, target: Point) -> EdgeConfig {
    let below = source.y + LOOP_PAD;
    let above = target.y - LOOP_PAD;
    let clearance_x = source.x.max(target.x) + LOOP_CLEARANCE;

    EdgeConfig {
        tier: EdgeTier::Loop,
        points: SmallVec::from_slice(&[
            source,
            Point::new(source.x, below),
            Point::new(clearance_x, below),
            Point::new(clearance_x, above),
            Point::new(target.x, above),
            target,
        ]),
        effective_waypoints: SmallVec::new(),
    }
}

/// Computes an edge's tier, axis-aligned path and normalized waypoint set.
///
/// Pure and deterministic; called on every render and every drag frame.
/// `source`/`target` are the current port positions, `stored` the edge's
/// persisted waypoints (possibly stale relative to the ports).
pub fn compute_edge_config(source: Point, target: Point, stored: &[Point]) -> EdgeConfig {
    let stored = sanitize_waypoints(stored);
    let co_aligned = (source.x - target.x).abs() < SNAP_THRESHOLD;

    // Backward edge: target port not strictly below the source port.
    if source.y >= target.y {
        return match stored {
            Some(wp) if wp.len() == 4 => five_segment_config(EdgeTier::Loop, source, target, wp),
            _ => default_loop_config(source, target),
        };
    }

    match stored {
        Some(wp) if wp.len() == 4 => {
            // The stored middle vertical collapsing onto the source column
            // means the detour no longer buys anything.
            if co_aligned && (wp[1].x - source.x).abs() < SNAP_THRESHOLD {
                EdgeConfig::direct(source, target)
            } else {
                five_segment_config(EdgeTier::ThreeBend, source, target, wp)
            }
        }
        Some(wp) => {
            if co_aligned {
                EdgeConfig::direct(source, target)
            } else {
                one_bend_config(source, target, wp[0].y, true)
            }
        }
        None => {
            if co_aligned {
                EdgeConfig::direct(source, target)
            } else {
                one_bend_config(source, target, (source.y + target.y) / 2.0, false)
            }
        }
    }
}

/// A rendering-framework independent path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
}

fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

fn toward(from: Point, to: Point, len: f64) -> Point {
    let total = distance(from, to);
    if total == 0.0 {
        return from;
    }
    Point::new(
        from.x + (to.x - from.x) / total * len,
        from.y + (to.y - from.y) / total * len,
    )
}

/// Builds a continuous path with rounded interior corners.
///
/// The radius at each vertex is clamped to half the length of both adjacent
/// segments; zero-length segments degrade to plain line-tos.
pub fn rounded_path(points: &[Point], radius: f64) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(points.len() * 2);
    commands.push(PathCommand::MoveTo(points[0]));

    for idx in 1..points.len() - 1 {
        let prev = points[idx - 1];
        let corner = points[idx];
        let next = points[idx + 1];

        let inbound = distance(prev, corner);
        let outbound = distance(corner, next);
        let r = radius.min(inbound / 2.0).min(outbound / 2.0);

        if r <= 0.0 {
            commands.push(PathCommand::LineTo(corner));
            continue;
        }

        commands.push(PathCommand::LineTo(toward(corner, prev, r)));
        commands.push(PathCommand::QuadTo {
            ctrl: corner,
            to: toward(corner, next, r),
        });
    }

    commands.push(PathCommand::LineTo(points[points.len() - 1]));
    commands
}
