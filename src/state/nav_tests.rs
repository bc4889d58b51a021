//! Tests for navigation state and path resolution.

use super::*;
use crate::model::TreeValue;
use serde_json::json;

fn tree(value: serde_json::Value) -> TreeValue {
    TreeValue::from(value)
}

fn path(segments: &[&str]) -> Path {
    Path::from_segments(segments.iter().map(|s| s.to_string()).collect())
}

#[test]
fn empty_path_resolves_to_root() {
    let root = tree(json!({"a": 1}));
    assert_eq!(resolve(&root, &Path::root()), &root);
}

#[test]
fn object_segments_resolve_by_key() {
    let root = tree(json!({"a": {"b": [1, 2]}}));
    assert_eq!(
        resolve(&root, &path(&["a", "b"])),
        &tree(json!([1, 2]))
    );
}

#[test]
fn array_segments_resolve_by_index() {
    let root = tree(json!({"items": ["x", "y"]}));
    assert_eq!(
        resolve(&root, &path(&["items", "1"])),
        &TreeValue::String("y".into())
    );
}

#[test]
fn every_prefix_of_a_valid_path_resolves() {
    let root = tree(json!({"a": {"b": {"c": 1}}}));
    let full = path(&["a", "b", "c"]);
    for len in 0..=full.len() {
        assert!(resolve_exact(&root, &full.prefix(len)).is_some());
    }
}

#[test]
fn path_past_a_scalar_degrades_to_the_scalar() {
    let root = tree(json!({"a": "leaf"}));
    assert_eq!(
        resolve(&root, &path(&["a", "too", "far"])),
        &TreeValue::String("leaf".into())
    );
}

#[test]
fn missing_key_degrades_to_deepest_ancestor() {
    let root = tree(json!({"a": {"b": 1}}));
    assert_eq!(
        resolve(&root, &path(&["a", "nope", "deeper"])),
        &tree(json!({"b": 1}))
    );
}

#[test]
fn out_of_range_index_degrades_to_the_array() {
    let root = tree(json!([1, 2]));
    assert_eq!(resolve(&root, &path(&["5"])), &root);
}

#[test]
fn non_numeric_index_on_array_degrades_to_the_array() {
    let root = tree(json!([1, 2]));
    assert_eq!(resolve(&root, &path(&["first"])), &root);
}

#[test]
fn resolve_exact_rejects_what_resolve_degrades() {
    let root = tree(json!({"a": {"b": 1}}));
    assert!(resolve_exact(&root, &path(&["a", "nope"])).is_none());
    assert!(resolve_exact(&root, &path(&["a", "b"])).is_some());
}

#[test]
fn enter_appends_and_jump_replaces() {
    let mut nav = NavigationState::new();
    nav.enter("a");
    nav.enter("b");
    assert_eq!(nav.current_path(), &path(&["a", "b"]));

    nav.jump_to(path(&["x"]));
    assert_eq!(nav.current_path(), &path(&["x"]));

    nav.reset();
    assert!(nav.current_path().is_root());
}
