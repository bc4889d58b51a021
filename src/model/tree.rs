//! Normalized tree value type.
//!
//! `TreeValue` is the single value representation both input formats parse
//! into. JSON maps onto it directly; XML is folded into it by the structural
//! converter in `parser::xml`.

use serde_json::Number;

/// A normalized hierarchical value.
///
/// Tagged sum type so every consumer matches exhaustively instead of
/// duck-typing on "is this an object". Objects preserve insertion order
/// (document order for XML, source order for JSON) because the viewer
/// displays entries in the order they appeared.
///
/// A subtree is immutable once constructed; navigation and expansion state
/// only ever reference into it.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    /// JSON `null`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar (arbitrary JSON number).
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered list of values.
    Array(Vec<TreeValue>),
    /// Insertion-ordered mapping from key to value.
    Object(Vec<(String, TreeValue)>),
}

impl TreeValue {
    /// Whether this value has children to drill into (object or array).
    pub fn is_composite(&self) -> bool {
        matches!(self, TreeValue::Object(_) | TreeValue::Array(_))
    }

    /// Number of direct children for composites, `0` for scalars.
    pub fn child_count(&self) -> usize {
        match self {
            TreeValue::Object(entries) => entries.len(),
            TreeValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Look up a direct child by path segment.
    ///
    /// Objects use the segment as a key; arrays parse it as a decimal index.
    /// Returns `None` for scalars, unknown keys, out-of-range indices, and
    /// non-numeric indices on arrays.
    pub fn child(&self, segment: &str) -> Option<&TreeValue> {
        match self {
            TreeValue::Object(entries) => entries
                .iter()
                .find(|(key, _)| key == segment)
                .map(|(_, value)| value),
            TreeValue::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Iterate direct children as `(segment, value)` pairs.
    ///
    /// Array children yield their decimal index as the segment, so the
    /// output feeds straight into path construction. Scalars yield nothing.
    pub fn entries(&self) -> Vec<(String, &TreeValue)> {
        match self {
            TreeValue::Object(entries) => entries
                .iter()
                .map(|(key, value)| (key.clone(), value))
                .collect(),
            TreeValue::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, value)| (i.to_string(), value))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<serde_json::Value> for TreeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => TreeValue::Null,
            serde_json::Value::Bool(b) => TreeValue::Bool(b),
            serde_json::Value::Number(n) => TreeValue::Number(n),
            serde_json::Value::String(s) => TreeValue::String(s),
            serde_json::Value::Array(items) => {
                TreeValue::Array(items.into_iter().map(TreeValue::from).collect())
            }
            serde_json::Value::Object(map) => TreeValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, TreeValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&TreeValue> for serde_json::Value {
    fn from(value: &TreeValue) -> Self {
        match value {
            TreeValue::Null => serde_json::Value::Null,
            TreeValue::Bool(b) => serde_json::Value::Bool(*b),
            TreeValue::Number(n) => serde_json::Value::Number(n.clone()),
            TreeValue::String(s) => serde_json::Value::String(s.clone()),
            TreeValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            TreeValue::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip_preserves_structure() {
        let source = json!({"a": {"b": [1, 2]}, "c": "text", "d": null});
        let tree = TreeValue::from(source.clone());
        let back = serde_json::Value::from(&tree);
        assert_eq!(back, source);
    }

    #[test]
    fn object_preserves_source_order() {
        let tree = TreeValue::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<String> = tree.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn array_entries_use_index_segments() {
        let tree = TreeValue::from(json!(["x", "y"]));
        let entries = tree.entries();
        assert_eq!(entries[0].0, "0");
        assert_eq!(entries[1].0, "1");
    }

    #[test]
    fn child_on_array_rejects_non_numeric_segment() {
        let tree = TreeValue::from(json!([1, 2, 3]));
        assert!(tree.child("one").is_none());
        assert!(tree.child("3").is_none());
        assert_eq!(tree.child("2"), Some(&TreeValue::Number(3.into())));
    }

    #[test]
    fn scalars_have_no_children() {
        let tree = TreeValue::String("leaf".into());
        assert!(!tree.is_composite());
        assert_eq!(tree.child_count(), 0);
        assert!(tree.entries().is_empty());
        assert!(tree.child("anything").is_none());
    }
}
