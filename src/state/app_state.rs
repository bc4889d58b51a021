//! Application state and document lifecycle.
//!
//! `AppState` is the root state type: the parsed tree plus everything the
//! user can change (path, expansion, cursors, focus). All transitions are
//! pure functions on this type; no module-level state anywhere.

use crate::model::{ParseError, TreeValue};
use crate::parser;
use crate::state::{resolve, ExpansionState, NavigationState};
use tracing::{debug, info};

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The tree outline (left pane).
    #[default]
    Outline,
    /// The current-level drill-down (right pane).
    CurrentLevel,
}

impl FocusPane {
    /// The other pane.
    pub fn cycled(self) -> FocusPane {
        match self {
            FocusPane::Outline => FocusPane::CurrentLevel,
            FocusPane::CurrentLevel => FocusPane::Outline,
        }
    }
}

/// A transient status-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Parse failure shown until the next successful parse.
    Error(String),
    /// Informational notice (e.g. copy feedback), shown until the next action.
    Notice(String),
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The parsed tree, if the last parse succeeded on non-empty input.
    document: Option<TreeValue>,
    /// Current position in the tree.
    pub nav: NavigationState,
    /// Expand/collapse overrides for the outline.
    pub expansion: ExpansionState,
    /// Which pane receives cursor movement.
    pub focus: FocusPane,
    /// Cursor row in the outline pane (index into projected outline rows).
    pub outline_cursor: usize,
    /// Cursor row in the current-level pane.
    pub level_cursor: usize,
    /// Status line content, if any.
    pub status: Option<StatusLine>,
    /// Whether the help overlay is showing.
    pub help_visible: bool,
    /// Display name of the input source (file name or `stdin`).
    pub source_name: String,
}

impl AppState {
    /// Fresh state with no document.
    pub fn new(source_name: impl Into<String>) -> Self {
        AppState {
            source_name: source_name.into(),
            ..AppState::default()
        }
    }

    /// The parsed tree, if any.
    pub fn document(&self) -> Option<&TreeValue> {
        self.document.as_ref()
    }

    /// The value the viewer is currently showing: the deepest resolvable
    /// ancestor of the current path.
    pub fn current_value(&self) -> Option<&TreeValue> {
        self.document
            .as_ref()
            .map(|root| resolve(root, self.nav.current_path()))
    }

    /// Parse `text` and install the result.
    ///
    /// On success the tree is replaced wholesale, the path and cursors reset,
    /// and any error cleared. On failure (or empty input) the tree is
    /// cleared and the path reset — never left partially updated. Expansion
    /// overrides survive a reparse; stale keys are harmless because absent
    /// nodes are simply never asked about.
    pub fn load_text(&mut self, text: &str, max_depth: usize) {
        match parser::parse_document(text, max_depth) {
            Ok(Some(tree)) => {
                info!(source = %self.source_name, "document parsed");
                self.document = Some(tree);
                self.status = None;
            }
            Ok(None) => {
                debug!("empty input, clearing document");
                self.document = None;
                self.status = None;
            }
            Err(err) => {
                info!(error = %err, "parse failed");
                self.document = None;
                self.status = Some(StatusLine::Error(parse_error_message(&err)));
            }
        }
        self.nav.reset();
        self.outline_cursor = 0;
        self.level_cursor = 0;
    }

    /// Current path and value serialized as a copyable block, mirroring the
    /// breadcrumb (`Path: a > b`) and pretty JSON for the value.
    pub fn copy_text(&self) -> Option<String> {
        let value = self.current_value()?;
        let json = serde_json::Value::from(value);
        let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string());
        Some(format!(
            "Path: {}\nValue: {}",
            self.nav.current_path().display_string(),
            pretty
        ))
    }
}

fn parse_error_message(err: &ParseError) -> String {
    format!("Error: {err}")
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
