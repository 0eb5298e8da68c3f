// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — pipeline-graph editor core (geometry + layout + sessions).
//!
//! The crate owns the algorithmic core of the pipeline editor: orthogonal
//! edge-path geometry, cycle-aware layered layout, the undo-safe editing
//! session, and the persisted↔live graph transforms. The surrounding view
//! shell (toolbars, inspectors, rendering, service calls) lives elsewhere and
//! talks to this crate through [`model::EditorSession`] and [`store`].

pub mod geometry;
pub mod layout;
pub mod model;
pub mod ops;
pub mod store;
