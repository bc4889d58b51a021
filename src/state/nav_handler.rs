//! Keyboard action handler (pure).
//!
//! Transforms `AppState` in response to a domain [`KeyAction`]. The shell
//! intercepts `Quit` and `Reload` (they need I/O); everything else lands
//! here. After every transition the state is internally consistent: the
//! projection is rebuilt from scratch by the caller, so there is nothing to
//! keep in sync beyond the state itself.

use crate::model::{KeyAction, Path, TreeValue};
use crate::project::{project, CurrentLevel, LevelRowKind, OutlineRow, OutlineRowKind, Projection};
use crate::state::{AppState, FocusPane, StatusLine};
use tracing::debug;

/// Rows a page jump moves the cursor by.
const PAGE_ROWS: usize = 10;

/// Handle a keyboard action, returning the new state.
pub fn handle_nav_action(mut state: AppState, action: KeyAction) -> AppState {
    // Notices are one-shot; any action clears them. Errors stay until the
    // next parse.
    if matches!(state.status, Some(StatusLine::Notice(_))) {
        state.status = None;
    }

    if state.help_visible {
        // Help overlay swallows everything except closing it.
        if matches!(action, KeyAction::Help | KeyAction::Quit) {
            state.help_visible = false;
        }
        return state;
    }

    if action == KeyAction::Help {
        state.help_visible = true;
        return state;
    }

    let Some(root) = state.document().cloned() else {
        // No document: nothing to navigate.
        return state;
    };
    let projection = project(&root, state.nav.current_path(), &state.expansion);

    match action {
        KeyAction::CursorUp => move_cursor(&mut state, &projection, -1),
        KeyAction::CursorDown => move_cursor(&mut state, &projection, 1),
        KeyAction::PageUp => move_cursor(&mut state, &projection, -(PAGE_ROWS as isize)),
        KeyAction::PageDown => move_cursor(&mut state, &projection, PAGE_ROWS as isize),
        KeyAction::CursorToTop => set_cursor(&mut state, &projection, 0),
        KeyAction::CursorToBottom => {
            let last = focused_row_count(&state, &projection).saturating_sub(1);
            set_cursor(&mut state, &projection, last);
        }
        KeyAction::Navigate => navigate(&mut state, &projection),
        KeyAction::JumpToParent => {
            let parent = state.nav.current_path().parent();
            jump(&mut state, &root, parent);
        }
        KeyAction::JumpToRoot => jump(&mut state, &root, Path::root()),
        KeyAction::ToggleExpand => toggle_expand(&mut state, &projection),
        KeyAction::ExpandAll => state.expansion.expand_all(),
        KeyAction::CollapseAll => {
            state.expansion.collapse_all(&root);
            // Rows under the cursor may have vanished.
            clamp_cursors(&mut state, &root);
        }
        KeyAction::CycleFocus => state.focus = state.focus.cycled(),
        KeyAction::CopyNode => {
            if let Some(text) = state.copy_text() {
                tracing::info!(target: "jxv::copy", "{text}");
                state.status = Some(StatusLine::Notice("Copied to log".to_string()));
            }
        }
        // Shell-handled actions and the help arm above.
        KeyAction::Reload | KeyAction::Quit | KeyAction::Help => {}
    }

    state
}

fn focused_row_count(state: &AppState, projection: &Projection) -> usize {
    match state.focus {
        FocusPane::Outline => projection.outline.len(),
        FocusPane::CurrentLevel => match &projection.current_level {
            CurrentLevel::Scalar(_) => 1,
            CurrentLevel::Entries(rows) => rows.len(),
        },
    }
}

fn move_cursor(state: &mut AppState, projection: &Projection, delta: isize) {
    let cursor = match state.focus {
        FocusPane::Outline => state.outline_cursor,
        FocusPane::CurrentLevel => state.level_cursor,
    };
    let target = cursor.saturating_add_signed(delta);
    set_cursor(state, projection, target);
}

fn set_cursor(state: &mut AppState, projection: &Projection, target: usize) {
    let max = focused_row_count(state, projection).saturating_sub(1);
    let clamped = target.min(max);
    match state.focus {
        FocusPane::Outline => state.outline_cursor = clamped,
        FocusPane::CurrentLevel => state.level_cursor = clamped,
    }
}

/// Outline: jump to the node under the cursor. Current level: drill into
/// the composite entry under the cursor (scalar rows are terminal).
fn navigate(state: &mut AppState, projection: &Projection) {
    match state.focus {
        FocusPane::Outline => {
            if let Some(row) = projection.outline.get(state.outline_cursor) {
                debug!(path = %row.path, "navigate from outline");
                state.nav.jump_to(row.path.clone());
                state.level_cursor = 0;
            }
        }
        FocusPane::CurrentLevel => {
            let CurrentLevel::Entries(rows) = &projection.current_level else {
                return;
            };
            let Some(row) = rows.get(state.level_cursor) else {
                return;
            };
            if matches!(row.kind, LevelRowKind::Explore { .. }) {
                debug!(segment = %row.segment, "drill into entry");
                state.nav.enter(&row.segment);
                state.level_cursor = 0;
                if let Some(root) = state.document().cloned() {
                    sync_outline_cursor(state, &root);
                }
            }
        }
    }
}

fn jump(state: &mut AppState, root: &TreeValue, path: Path) {
    state.nav.jump_to(path);
    state.level_cursor = 0;
    sync_outline_cursor(state, root);
}

/// Flip expansion of the composite under the outline cursor without
/// navigating to it.
fn toggle_expand(state: &mut AppState, projection: &Projection) {
    if state.focus != FocusPane::Outline {
        return;
    }
    let Some(row) = projection.outline.get(state.outline_cursor) else {
        return;
    };
    if is_composite_row(row) {
        state.expansion.toggle(&row.path.expansion_key());
        if let Some(root) = state.document().cloned() {
            clamp_cursors(state, &root);
        }
    }
}

fn is_composite_row(row: &OutlineRow) -> bool {
    matches!(row.kind, OutlineRowKind::Composite { .. })
}

/// Point the outline cursor at the row for the current path, if visible.
fn sync_outline_cursor(state: &mut AppState, root: &TreeValue) {
    let projection = project(root, state.nav.current_path(), &state.expansion);
    if let Some(index) = projection.outline.iter().position(|row| row.is_current) {
        state.outline_cursor = index;
    } else {
        state.outline_cursor = state.outline_cursor.min(projection.outline.len().saturating_sub(1));
    }
}

fn clamp_cursors(state: &mut AppState, root: &TreeValue) {
    let projection = project(root, state.nav.current_path(), &state.expansion);
    state.outline_cursor = state
        .outline_cursor
        .min(projection.outline.len().saturating_sub(1));
    let level_rows = match &projection.current_level {
        CurrentLevel::Scalar(_) => 1,
        CurrentLevel::Entries(rows) => rows.len(),
    };
    state.level_cursor = state.level_cursor.min(level_rows.saturating_sub(1));
}

// ===== Tests =====

#[cfg(test)]
#[path = "nav_handler_tests.rs"]
mod tests;
