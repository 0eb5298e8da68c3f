// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::KindId;

/// Connection role of a node kind.
///
/// Source kinds cannot receive edges, sink kinds cannot emit edges;
/// pass-through kinds do both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindRole {
    Source,
    Sink,
    PassThrough,
}

impl KindRole {
    pub fn can_receive(&self) -> bool {
        !matches!(self, Self::Source)
    }

    pub fn can_emit(&self) -> bool {
        !matches!(self, Self::Sink)
    }
}

/// Shell-supplied definition of a node kind.
///
/// `width`/`height` are the declared default dimensions used for port and
/// layout geometry whenever a node carries no measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeKindDef {
    kind_id: KindId,
    label: String,
    role: KindRole,
    width: f64,
    height: f64,
}

pub const DEFAULT_NODE_WIDTH: f64 = 192.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 80.0;

impl NodeKindDef {
    pub fn new(kind_id: KindId, label: impl Into<String>, role: KindRole) -> Self {
        Self {
            kind_id,
            label: label.into(),
            role,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
        }
    }

    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn kind_id(&self) -> &KindId {
        &self.kind_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> KindRole {
        self.role
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// The set of node kinds available to a graph instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KindRegistry {
    kinds: BTreeMap<KindId, NodeKindDef>,
}

impl KindRegistry {
    pub fn new(defs: impl IntoIterator<Item = NodeKindDef>) -> Self {
        let kinds = defs
            .into_iter()
            .map(|def| (def.kind_id().clone(), def))
            .collect();
        Self { kinds }
    }

    pub fn kinds(&self) -> &BTreeMap<KindId, NodeKindDef> {
        &self.kinds
    }

    pub fn get(&self, kind_id: &KindId) -> Option<&NodeKindDef> {
        self.kinds.get(kind_id)
    }

    pub fn contains(&self, kind_id: &KindId) -> bool {
        self.kinds.contains_key(kind_id)
    }

    /// Role of a kind; unknown kinds default to pass-through so foreign data
    /// stays loadable.
    pub fn role_of(&self, kind_id: &KindId) -> KindRole {
        self.kinds
            .get(kind_id)
            .map(|def| def.role())
            .unwrap_or(KindRole::PassThrough)
    }
}
