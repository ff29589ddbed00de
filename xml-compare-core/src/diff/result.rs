use std::collections::BTreeMap;

use serde::Serialize;

use crate::unique::NodeWrapper;

/// Difference recorded for one unique path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DiffEntry {
    /// Path only exists in the left document.
    OnlyLeft {
        path: String,
        nodes: Vec<NodeWrapper>,
    },
    /// Path only exists in the right document.
    OnlyRight {
        path: String,
        nodes: Vec<NodeWrapper>,
    },
    /// Path exists in both but the distinct element content differs.
    Changed {
        path: String,
        left: Vec<NodeWrapper>,
        right: Vec<NodeWrapper>,
    },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::OnlyLeft { path, .. }
            | DiffEntry::OnlyRight { path, .. }
            | DiffEntry::Changed { path, .. } => path,
        }
    }

    /// Elements contributed by the left document, if it contributes any.
    pub fn left(&self) -> Option<&[NodeWrapper]> {
        match self {
            DiffEntry::OnlyLeft { nodes, .. } => Some(nodes.as_slice()),
            DiffEntry::Changed { left, .. } => Some(left.as_slice()),
            DiffEntry::OnlyRight { .. } => None,
        }
    }

    /// Elements contributed by the right document, if it contributes any.
    pub fn right(&self) -> Option<&[NodeWrapper]> {
        match self {
            DiffEntry::OnlyRight { nodes, .. } => Some(nodes.as_slice()),
            DiffEntry::Changed { right, .. } => Some(right.as_slice()),
            DiffEntry::OnlyLeft { .. } => None,
        }
    }
}

/// All differences between two documents, keyed by unique path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffReport {
    entries: BTreeMap<String, DiffEntry>,
}

impl DiffReport {
    pub(crate) fn insert(&mut self, entry: DiffEntry) {
        self.entries.insert(entry.path().to_string(), entry);
    }

    /// `true` when no path differs.
    pub fn is_equivalent(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&DiffEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Entries ordered by path.
    pub fn entries(&self) -> impl Iterator<Item = &DiffEntry> + '_ {
        self.entries.values()
    }

    /// Differing paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}
