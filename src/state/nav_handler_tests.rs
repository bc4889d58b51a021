//! Tests for the keyboard action handler.

use super::*;
use crate::model::KeyAction;
use crate::state::AppState;

const DEPTH: usize = 64;

fn loaded_state(json: &str) -> AppState {
    let mut state = AppState::new("test.json");
    state.load_text(json, DEPTH);
    state
}

fn apply(state: AppState, actions: &[KeyAction]) -> AppState {
    actions
        .iter()
        .fold(state, |s, &a| handle_nav_action(s, a))
}

#[test]
fn cursor_moves_and_clamps_within_outline() {
    let state = loaded_state(r#"{"a": 1, "b": 2, "c": 3}"#);
    let state = apply(state, &[KeyAction::CursorDown, KeyAction::CursorDown]);
    assert_eq!(state.outline_cursor, 2);

    // Already on the last row; stays put.
    let state = apply(state, &[KeyAction::CursorDown]);
    assert_eq!(state.outline_cursor, 2);

    let state = apply(state, &[KeyAction::CursorToTop, KeyAction::CursorUp]);
    assert_eq!(state.outline_cursor, 0);
}

#[test]
fn navigate_from_outline_sets_current_path() {
    let state = loaded_state(r#"{"a": {"b": 1}, "c": 2}"#);
    // Outline rows: a (0), a.b (1), c (2).
    let state = apply(state, &[KeyAction::CursorDown, KeyAction::Navigate]);
    assert_eq!(state.nav.current_path().expansion_key(), "a.b");
}

#[test]
fn drill_into_composite_entry_appends_segment() {
    let mut state = loaded_state(r#"{"a": {"b": [1, 2]}}"#);
    state.focus = FocusPane::CurrentLevel;

    let state = apply(state, &[KeyAction::Navigate]);
    assert_eq!(state.nav.current_path().expansion_key(), "a");

    let state = apply(state, &[KeyAction::Navigate]);
    assert_eq!(state.nav.current_path().expansion_key(), "a.b");
}

#[test]
fn navigate_on_scalar_entry_is_a_no_op() {
    let mut state = loaded_state(r#"{"x": 1}"#);
    state.focus = FocusPane::CurrentLevel;
    let state = apply(state, &[KeyAction::Navigate]);
    assert!(state.nav.current_path().is_root());
}

#[test]
fn jump_to_parent_walks_the_breadcrumb_back() {
    let mut state = loaded_state(r#"{"a": {"b": [1, 2]}}"#);
    state.nav.enter("a");
    state.nav.enter("b");

    let state = apply(state, &[KeyAction::JumpToParent]);
    assert_eq!(state.nav.current_path().expansion_key(), "a");

    let state = apply(state, &[KeyAction::JumpToParent, KeyAction::JumpToParent]);
    assert!(state.nav.current_path().is_root());
}

#[test]
fn jump_to_root_resets_path() {
    let mut state = loaded_state(r#"{"a": {"b": 1}}"#);
    state.nav.enter("a");
    let state = apply(state, &[KeyAction::JumpToRoot]);
    assert!(state.nav.current_path().is_root());
}

#[test]
fn toggle_expand_flips_without_navigating() {
    let state = loaded_state(r#"{"a": {"b": 1}}"#);
    let state = apply(state, &[KeyAction::ToggleExpand]);

    assert!(!state.expansion.is_expanded("a"));
    assert!(state.nav.current_path().is_root());

    let state = apply(state, &[KeyAction::ToggleExpand]);
    assert!(state.expansion.is_expanded("a"));
}

#[test]
fn toggle_expand_on_leaf_row_does_nothing() {
    let state = loaded_state(r#"{"x": 1}"#);
    let state = apply(state, &[KeyAction::ToggleExpand]);
    assert_eq!(state.expansion.override_count(), 0);
}

#[test]
fn collapse_all_then_expand_all_round_trips() {
    let state = loaded_state(r#"{"a": {"b": {"c": 1}}, "d": [1]}"#);
    let state = apply(state, &[KeyAction::CollapseAll]);
    assert!(!state.expansion.is_expanded("a"));
    assert!(!state.expansion.is_expanded("d"));

    let state = apply(state, &[KeyAction::ExpandAll]);
    assert!(state.expansion.is_expanded("a"));
    assert_eq!(state.expansion.override_count(), 0);
}

#[test]
fn collapse_all_clamps_cursor_to_remaining_rows() {
    let mut state = loaded_state(r#"{"a": {"b": {"c": 1}}}"#);
    state.outline_cursor = 2; // a.b.c
    let state = apply(state, &[KeyAction::CollapseAll]);
    // Only `a` remains visible.
    assert_eq!(state.outline_cursor, 0);
}

#[test]
fn cycle_focus_alternates_panes() {
    let state = loaded_state(r#"{"a": 1}"#);
    assert_eq!(state.focus, FocusPane::Outline);
    let state = apply(state, &[KeyAction::CycleFocus]);
    assert_eq!(state.focus, FocusPane::CurrentLevel);
    let state = apply(state, &[KeyAction::CycleFocus]);
    assert_eq!(state.focus, FocusPane::Outline);
}

#[test]
fn navigation_syncs_outline_cursor_to_current_path() {
    let mut state = loaded_state(r#"{"a": {"b": 1}, "c": 2}"#);
    state.focus = FocusPane::CurrentLevel;
    // Drill into `a`: outline cursor should land on the `a` row.
    let state = apply(state, &[KeyAction::Navigate]);
    assert_eq!(state.outline_cursor, 0);
    assert_eq!(state.nav.current_path().expansion_key(), "a");
}

#[test]
fn help_overlay_swallows_navigation() {
    let state = loaded_state(r#"{"a": 1, "b": 2}"#);
    let state = apply(state, &[KeyAction::Help]);
    assert!(state.help_visible);

    let state = apply(state, &[KeyAction::CursorDown]);
    assert_eq!(state.outline_cursor, 0);
    assert!(state.help_visible);

    let state = apply(state, &[KeyAction::Help]);
    assert!(!state.help_visible);
}

#[test]
fn actions_without_document_are_no_ops() {
    let state = AppState::new("stdin");
    let state = apply(
        state,
        &[KeyAction::CursorDown, KeyAction::Navigate, KeyAction::CollapseAll],
    );
    assert!(state.document().is_none());
    assert_eq!(state.outline_cursor, 0);
}

#[test]
fn copy_node_sets_notice_and_next_action_clears_it() {
    let state = loaded_state(r#"{"a": 1}"#);
    let state = apply(state, &[KeyAction::CopyNode]);
    assert!(matches!(state.status, Some(StatusLine::Notice(_))));

    let state = apply(state, &[KeyAction::CursorDown]);
    assert!(state.status.is_none());
}

#[test]
fn page_down_moves_by_page_and_clamps() {
    let json = r#"{"a":1,"b":2,"c":3,"d":4,"e":5}"#;
    let state = loaded_state(json);
    let state = apply(state, &[KeyAction::PageDown]);
    // Only 5 rows; cursor clamps to the last.
    assert_eq!(state.outline_cursor, 4);
    let state = apply(state, &[KeyAction::PageUp]);
    assert_eq!(state.outline_cursor, 0);
}
