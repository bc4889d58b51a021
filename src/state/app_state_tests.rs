//! Tests for application state and document lifecycle.

use super::*;
use serde_json::json;

const DEPTH: usize = 64;

#[test]
fn new_state_has_no_document() {
    let state = AppState::new("stdin");
    assert!(state.document().is_none());
    assert!(state.current_value().is_none());
    assert!(state.nav.current_path().is_root());
}

#[test]
fn successful_parse_installs_tree_and_resets_path() {
    let mut state = AppState::new("test.json");
    state.nav.enter("stale");
    state.outline_cursor = 5;

    state.load_text(r#"{"a": 1}"#, DEPTH);

    assert!(state.document().is_some());
    assert!(state.nav.current_path().is_root());
    assert_eq!(state.outline_cursor, 0);
    assert!(state.status.is_none());
}

#[test]
fn parse_failure_clears_tree_and_reports_error() {
    let mut state = AppState::new("test.json");
    state.load_text(r#"{"a": 1}"#, DEPTH);
    state.nav.enter("a");

    state.load_text("{broken", DEPTH);

    assert!(state.document().is_none());
    assert!(state.nav.current_path().is_root());
    match &state.status {
        Some(StatusLine::Error(msg)) => assert!(msg.starts_with("Error:")),
        other => panic!("expected error status, got {other:?}"),
    }
}

#[test]
fn empty_input_clears_document_without_error() {
    let mut state = AppState::new("test.json");
    state.load_text(r#"{"a": 1}"#, DEPTH);
    state.load_text("   ", DEPTH);
    assert!(state.document().is_none());
    assert!(state.status.is_none());
}

#[test]
fn expansion_overrides_survive_reparse() {
    let mut state = AppState::new("test.json");
    state.load_text(r#"{"a": {"b": 1}}"#, DEPTH);
    state.expansion.toggle("a");
    assert!(!state.expansion.is_expanded("a"));

    state.load_text(r#"{"a": {"c": 2}}"#, DEPTH);
    assert!(!state.expansion.is_expanded("a"));
}

#[test]
fn current_value_follows_path_with_degradation() {
    let mut state = AppState::new("test.json");
    state.load_text(r#"{"a": {"b": [1, 2]}}"#, DEPTH);
    state.nav.enter("a");
    state.nav.enter("b");
    assert_eq!(
        state.current_value(),
        Some(&crate::model::TreeValue::from(json!([1, 2])))
    );

    state.nav.enter("missing");
    // Degrades to the deepest resolvable ancestor.
    assert_eq!(
        state.current_value(),
        Some(&crate::model::TreeValue::from(json!([1, 2])))
    );
}

#[test]
fn copy_text_includes_path_and_pretty_value() {
    let mut state = AppState::new("test.json");
    state.load_text(r#"{"a": {"b": 2}}"#, DEPTH);
    state.nav.enter("a");

    let text = state.copy_text().expect("document is loaded");
    assert!(text.starts_with("Path: a\n"));
    assert!(text.contains("\"b\": 2"));
}

#[test]
fn copy_text_is_none_without_document() {
    let state = AppState::new("stdin");
    assert!(state.copy_text().is_none());
}

#[test]
fn xml_input_loads_through_same_lifecycle() {
    let mut state = AppState::new("test.xml");
    state.load_text(r#"<root attr="x"><child>hi</child></root>"#, DEPTH);
    let root = state.document().expect("xml should parse");
    assert_eq!(
        serde_json::Value::from(root),
        json!({"@attr": "x", "child": "hi"})
    );
}
