//! Black-box integration tests through the public API.

use jxv::model::{KeyAction, Path};
use jxv::project::{project, CurrentLevel};
use jxv::state::{handle_nav_action, AppState, FocusPane};

const DEPTH: usize = 512;

#[test]
fn full_session_parse_navigate_project() {
    let mut state = AppState::new("orders.json");
    state.load_text(
        r#"{"orders": [{"id": 1, "items": ["a", "b"]}, {"id": 2}], "total": 2}"#,
        DEPTH,
    );

    // Drill: orders -> 0 -> items via direct navigation.
    state.nav.enter("orders");
    state.nav.enter("0");
    state.nav.enter("items");

    let root = state.document().expect("document loaded");
    let projection = project(root, state.nav.current_path(), &state.expansion);

    let labels: Vec<&str> = projection.breadcrumb.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["root", "orders", "0", "items"]);
    assert_eq!(projection.path_display, "orders > 0 > items");

    let CurrentLevel::Entries(rows) = &projection.current_level else {
        panic!("expected rows at the items array");
    };
    assert_eq!(rows.len(), 2);
}

#[test]
fn xml_document_is_explorable_like_json() {
    let mut state = AppState::new("feed.xml");
    state.load_text(
        "<feed version=\"1\"><entry><title>one</title></entry><entry><title>two</title></entry></feed>",
        DEPTH,
    );

    // Sibling <entry> elements folded into an array under `entry`.
    state.nav.enter("entry");
    state.nav.enter("1");
    state.nav.enter("title");

    let root = state.document().expect("xml loaded");
    let projection = project(root, state.nav.current_path(), &state.expansion);
    assert_eq!(projection.current_level, CurrentLevel::Scalar("two".into()));
}

#[test]
fn keyboard_session_collapse_and_navigate() {
    let mut state = AppState::new("data.json");
    state.load_text(r#"{"a": {"b": 1}, "c": {"d": 2}}"#, DEPTH);
    assert_eq!(state.focus, FocusPane::Outline);

    // Collapse everything, walk to the second top-level row, navigate.
    let state = handle_nav_action(state, KeyAction::CollapseAll);
    let state = handle_nav_action(state, KeyAction::CursorDown);
    let state = handle_nav_action(state, KeyAction::Navigate);
    assert_eq!(state.nav.current_path().expansion_key(), "c");

    // Jump home.
    let state = handle_nav_action(state, KeyAction::JumpToRoot);
    assert_eq!(state.nav.current_path(), &Path::root());
}
