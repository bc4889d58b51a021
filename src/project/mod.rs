//! View projection (pure).
//!
//! Turns `(tree, current path, expansion state)` into plain renderable
//! descriptions of the three views: breadcrumb trail, current-level rows,
//! and the tree outline. Nothing here owns state or touches the terminal;
//! the shell rebuilds the whole projection from state after every action
//! instead of patching views incrementally, so the views can never drift
//! from the state.

use crate::format::{composite_label, format_value};
use crate::model::{Path, TreeValue};
use crate::state::{resolve, ExpansionState};

/// One activatable step in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Display label (`root` for the first crumb, else the segment).
    pub label: String,
    /// Prefix path to jump to when activated.
    pub path: Path,
}

/// One row of the current-level pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRow {
    /// Child segment this row represents.
    pub segment: String,
    /// What activating the row does, and what it shows.
    pub kind: LevelRowKind,
}

/// Row payload: inline value for scalars, explore affordance for composites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelRowKind {
    /// Scalar entry: formatted value shown inline, no drill-down.
    Scalar {
        /// Formatted display text.
        display: String,
    },
    /// Composite entry: activating it appends the segment to the path.
    Explore {
        /// Affordance label; arrays include their length.
        label: String,
    },
}

/// The current-level pane content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentLevel {
    /// The value at the current path is a scalar: one formatted display.
    Scalar(String),
    /// The value is a composite: one row per entry, in order.
    Entries(Vec<LevelRow>),
}

/// One row of the flattened tree outline.
///
/// Collapsed subtrees produce no rows at all — the outline a renderer sees
/// is exactly what is visible, which also bounds rendering work on large
/// trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    /// Nesting depth (root's children are 0).
    pub depth: usize,
    /// Segment label for this row.
    pub segment: String,
    /// Full path to this node (activation target).
    pub path: Path,
    /// Row payload.
    pub kind: OutlineRowKind,
    /// Whether this row's path equals the current path exactly.
    pub is_current: bool,
}

/// Outline row payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineRowKind {
    /// Leaf row: `segment: value` in one line.
    Leaf {
        /// Formatted scalar value.
        display: String,
    },
    /// Composite row with its open/closed marker.
    Composite {
        /// Effective expansion from [`ExpansionState`].
        expanded: bool,
    },
}

/// Everything the renderer needs, rebuilt from state on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Breadcrumb trail, `root` first.
    pub breadcrumb: Vec<Crumb>,
    /// Current-level pane content.
    pub current_level: CurrentLevel,
    /// Flattened, expansion-filtered outline of the whole tree.
    pub outline: Vec<OutlineRow>,
    /// Current path joined for display (` > ` separated, empty at root).
    pub path_display: String,
    /// Formatted value at the current path.
    pub value_display: String,
}

/// Project the session state into renderable artifacts.
pub fn project(root: &TreeValue, current_path: &Path, expansion: &ExpansionState) -> Projection {
    let current = resolve(root, current_path);
    Projection {
        breadcrumb: project_breadcrumb(current_path),
        current_level: project_current_level(current),
        outline: project_outline(root, current_path, expansion),
        path_display: current_path.display_string(),
        value_display: format_value(current),
    }
}

fn project_breadcrumb(current_path: &Path) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "root".to_string(),
        path: Path::root(),
    }];
    for (i, segment) in current_path.segments().enumerate() {
        crumbs.push(Crumb {
            label: segment.to_string(),
            path: current_path.prefix(i + 1),
        });
    }
    crumbs
}

fn project_current_level(current: &TreeValue) -> CurrentLevel {
    if !current.is_composite() {
        return CurrentLevel::Scalar(format_value(current));
    }
    let rows = current
        .entries()
        .into_iter()
        .map(|(segment, value)| {
            let kind = if value.is_composite() {
                LevelRowKind::Explore {
                    label: composite_label(value),
                }
            } else {
                LevelRowKind::Scalar {
                    display: format_value(value),
                }
            };
            LevelRow { segment, kind }
        })
        .collect();
    CurrentLevel::Entries(rows)
}

fn project_outline(
    root: &TreeValue,
    current_path: &Path,
    expansion: &ExpansionState,
) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    push_outline_rows(root, &Path::root(), 0, current_path, expansion, &mut rows);
    rows
}

fn push_outline_rows(
    value: &TreeValue,
    path: &Path,
    depth: usize,
    current_path: &Path,
    expansion: &ExpansionState,
    rows: &mut Vec<OutlineRow>,
) {
    for (segment, child) in value.entries() {
        let child_path = path.join(&segment);
        let is_current = &child_path == current_path;
        if child.is_composite() {
            let expanded = expansion.is_expanded(&child_path.expansion_key());
            rows.push(OutlineRow {
                depth,
                segment,
                path: child_path.clone(),
                kind: OutlineRowKind::Composite { expanded },
                is_current,
            });
            // Collapsed subtrees are skipped entirely, not hidden later.
            if expanded {
                push_outline_rows(child, &child_path, depth + 1, current_path, expansion, rows);
            }
        } else {
            rows.push(OutlineRow {
                depth,
                segment,
                path: child_path,
                kind: OutlineRowKind::Leaf {
                    display: format_value(child),
                },
                is_current,
            });
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
