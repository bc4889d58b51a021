//! Navigation state: the current path and path resolution.

use crate::model::{Path, TreeValue};

/// Where the user currently is in the tree.
///
/// Owns only the path; the tree itself lives on the session and is never
/// mutated by navigation. Every action replaces the path wholesale, so
/// state is never part-way between two positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_path: Path,
}

impl NavigationState {
    /// Start at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current path.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Append one segment (drilling into a child).
    pub fn enter(&mut self, segment: &str) {
        self.current_path.push(segment.to_string());
    }

    /// Replace the path wholesale (breadcrumb or outline jump).
    pub fn jump_to(&mut self, path: Path) {
        self.current_path = path;
    }

    /// Go back to the root.
    pub fn reset(&mut self) {
        self.current_path = Path::root();
    }
}

/// Resolve `path` against `root`, degrading gracefully.
///
/// Walks left to right. Objects look the segment up as a key; arrays parse
/// it as a decimal index. A missing key, bad index, or a scalar reached
/// mid-path stops the walk: the value accumulated so far is returned. A
/// too-long path therefore yields the deepest resolvable ancestor rather
/// than an error — total over all inputs.
pub fn resolve<'a>(root: &'a TreeValue, path: &Path) -> &'a TreeValue {
    let mut current = root;
    for segment in path.segments() {
        match current.child(segment) {
            Some(child) => current = child,
            None => break,
        }
    }
    current
}

/// Resolve `path` exactly: `None` unless every segment traverses.
///
/// Used where "this path still exists" matters (outline highlighting),
/// while [`resolve`] is what the viewer displays.
pub fn resolve_exact<'a>(root: &'a TreeValue, path: &Path) -> Option<&'a TreeValue> {
    let mut current = root;
    for segment in path.segments() {
        current = current.child(segment)?;
    }
    Some(current)
}

// ===== Tests =====

#[cfg(test)]
#[path = "nav_tests.rs"]
mod tests;
