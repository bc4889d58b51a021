//! Value display formatting.
//!
//! One formatter feeds every place a value is shown: leaf rows in the
//! outline, inline values in the current-level pane, and the current-value
//! panel. Output is for human display only and is not required to parse
//! back into a tree.

use crate::model::TreeValue;

/// Render a value for display.
///
/// - String scalars come back verbatim, unquoted.
/// - Other scalars use their canonical JSON text (`true`, `null`, `1.5`).
/// - Composites are pretty-printed with 2-space indent, then two cosmetic
///   transforms: quotes around object keys are stripped and every line is
///   prefixed with two extra spaces.
pub fn format_value(value: &TreeValue) -> String {
    match value {
        TreeValue::String(s) => s.clone(),
        TreeValue::Null => "null".to_string(),
        TreeValue::Bool(b) => b.to_string(),
        TreeValue::Number(n) => n.to_string(),
        TreeValue::Array(_) | TreeValue::Object(_) => {
            let json = serde_json::Value::from(value);
            let pretty =
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| String::from("{}"));
            pretty
                .lines()
                .map(|line| format!("  {}", strip_key_quotes(line)))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Short label for an "explore" affordance: arrays advertise their length.
pub fn composite_label(value: &TreeValue) -> String {
    match value {
        TreeValue::Array(items) => format!("Explore Array({})", items.len()),
        _ => "Explore Object".to_string(),
    }
}

/// Strip the quotes around an object key on one pretty-printed line.
///
/// Matches `"key":` after leading indentation and drops the quotes. String
/// values keep theirs. Same cosmetic rewrite the value panel has always
/// shown; keys containing `"` or `:` are left alone rather than guessed at.
fn strip_key_quotes(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    let Some(stripped) = rest.strip_prefix('"') else {
        return line.to_string();
    };
    let Some(close) = stripped.find('"') else {
        return line.to_string();
    };
    let key = &stripped[..close];
    let after = &stripped[close + 1..];
    if key.contains(':') || !after.starts_with(':') {
        return line.to_string();
    }
    format!("{indent}{key}{after}")
}

// ===== Tests =====

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
