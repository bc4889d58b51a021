//! Expand/collapse memory for the tree outline.

use crate::model::{Path, TreeValue};
use std::collections::HashMap;

/// Per-node expansion overrides, keyed by [`Path::expansion_key`].
///
/// Absence means expanded: a fresh tree renders fully open without a single
/// entry here. That asymmetry shapes the bulk operations — expand-all can
/// just clear the map, but collapse-all has to visit every internal node
/// and write `false` explicitly, because absence cannot express "closed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    overrides: HashMap<String, bool>,
}

impl ExpansionState {
    /// Fresh state: everything reads expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective expansion for a key: the stored override, else open.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.overrides.get(key).copied().unwrap_or(true)
    }

    /// Flip a key's effective state and store the result explicitly.
    pub fn toggle(&mut self, key: &str) {
        let flipped = !self.is_expanded(key);
        self.overrides.insert(key.to_string(), flipped);
    }

    /// Open everything by dropping all overrides.
    pub fn expand_all(&mut self) {
        self.overrides.clear();
    }

    /// Close every internal node reachable from `root`.
    pub fn collapse_all(&mut self, root: &TreeValue) {
        self.collapse_subtree(root, &Path::root());
    }

    fn collapse_subtree(&mut self, value: &TreeValue, path: &Path) {
        for (segment, child) in value.entries() {
            if child.is_composite() {
                let child_path = path.join(&segment);
                self.overrides.insert(child_path.expansion_key(), false);
                self.collapse_subtree(child, &child_path);
            }
        }
    }

    /// Number of explicit overrides currently stored.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "expansion_tests.rs"]
mod tests;
