// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation gating and interactive edge reshaping.
//!
//! Connection legality is a pure predicate the session consults before
//! mutating; reshaping is a small per-edge drag state machine. Anything
//! beyond connection legality (schema validation, pipeline semantics) is a
//! shell concern.

pub mod reshape;

use std::fmt;

use crate::model::graph::PipelineGraph;
use crate::model::ids::NodeId;
use crate::model::kind::KindRegistry;

pub use reshape::ReshapeDrag;

/// Why a prospective connection was rejected.
///
/// The display strings are surfaced verbatim by the shell (tooltip copy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectReject {
    UnknownNode { node_id: NodeId },
    SelfLoop,
    TargetIsSource,
    SourceIsSink,
    Duplicate,
}

impl fmt::Display for ConnectReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node_id } => write!(f, "unknown node {node_id}"),
            Self::SelfLoop => f.write_str("self-loop forbidden"),
            Self::TargetIsSource => f.write_str("target cannot receive edges"),
            Self::SourceIsSink => f.write_str("source cannot emit edges"),
            Self::Duplicate => f.write_str("duplicate connection"),
        }
    }
}

impl std::error::Error for ConnectReject {}

/// Checks whether `from → to` may be added, short-circuiting on the first
/// failed check. `None` means the connection is legal.
///
/// Cycles are deliberately not rejected: a pipeline may loop a stage's
/// output back to an earlier stage.
pub fn validate_connection(
    from: &NodeId,
    to: &NodeId,
    graph: &PipelineGraph,
    kinds: &KindRegistry,
) -> Option<ConnectReject> {
    // Role lookups need both endpoints to exist.
    for node_id in [from, to] {
        if !graph.nodes().contains_key(node_id) {
            return Some(ConnectReject::UnknownNode { node_id: node_id.clone() });
        }
    }

    if from == to {
        return Some(ConnectReject::SelfLoop);
    }

    let target_kind = graph.nodes()[to].kind();
    if !kinds.role_of(target_kind).can_receive() {
        return Some(ConnectReject::TargetIsSource);
    }

    let source_kind = graph.nodes()[from].kind();
    if !kinds.role_of(source_kind).can_emit() {
        return Some(ConnectReject::SourceIsSink);
    }

    if graph.has_edge(from, to) {
        return Some(ConnectReject::Duplicate);
    }

    None
}
