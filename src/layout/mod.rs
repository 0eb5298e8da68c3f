// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cycle-aware layered layout.
//!
//! Back-edges discovered by depth-first traversal are excluded, a rank-based
//! layout runs over the acyclic projection, and every node receives an
//! absolute position — the original (possibly cyclic) edge set is drawn
//! against those positions afterwards.

pub mod layered;
pub mod traversal;

pub use layered::{layout_graph, LayoutConfig, LayoutDirection};
pub use traversal::{classify_edges, EdgeClassification};
