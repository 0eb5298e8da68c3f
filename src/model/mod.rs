// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: ids, the live graph, node kinds and the editor session.

pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod kind;
pub mod session;

pub use graph::{PipelineEdge, PipelineGraph, PipelineNode};
pub use ids::{EdgeKey, Id, IdError, KindId, NodeId};
pub use kind::{KindRegistry, KindRole, NodeKindDef};
pub use session::{EditorSession, Selection, SessionError};
