//! Document parsing.
//!
//! Converts raw input text into a [`TreeValue`] at the input boundary, so
//! everything past this module works on one normalized representation.
//! Input starting with `<` is treated as XML and goes through the structural
//! converter in [`xml`]; everything else is parsed as JSON.

pub mod xml;

use crate::model::{ParseError, TreeValue};

/// Parse raw document text into a tree.
///
/// Returns `Ok(None)` for empty (or whitespace-only) input: an empty
/// document is not an error, it just clears the viewer.
///
/// `max_depth` bounds XML element nesting; see [`xml::parse`]. JSON nesting
/// is bounded by serde_json's own recursion limit.
///
/// # Errors
///
/// [`ParseError::InvalidMarkup`] for malformed XML,
/// [`ParseError::InvalidJson`] for malformed JSON.
pub fn parse_document(input: &str, max_depth: usize) -> Result<Option<TreeValue>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tree = if trimmed.starts_with('<') {
        xml::parse(trimmed, max_depth)?
    } else {
        let value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(|err| ParseError::InvalidJson {
                message: err.to_string(),
            })?;
        TreeValue::from(value)
    };
    Ok(Some(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEPTH: usize = 64;

    #[test]
    fn empty_input_parses_to_none() {
        assert_eq!(parse_document("", DEPTH), Ok(None));
        assert_eq!(parse_document("   \n\t ", DEPTH), Ok(None));
    }

    #[test]
    fn json_input_round_trips() {
        let tree = parse_document(r#"{"a": {"b": [1, 2]}}"#, DEPTH)
            .unwrap()
            .unwrap();
        assert_eq!(serde_json::Value::from(&tree), json!({"a": {"b": [1, 2]}}));
    }

    #[test]
    fn json_scalar_at_top_level_is_accepted() {
        let tree = parse_document("42", DEPTH).unwrap().unwrap();
        assert_eq!(tree, TreeValue::Number(42.into()));
    }

    #[test]
    fn leading_angle_bracket_selects_xml() {
        let tree = parse_document(r#"<root attr="x"><child>hi</child></root>"#, DEPTH)
            .unwrap()
            .unwrap();
        assert_eq!(
            serde_json::Value::from(&tree),
            json!({"@attr": "x", "child": "hi"})
        );
    }

    #[test]
    fn invalid_json_reports_parser_message() {
        let err = parse_document("{not json", DEPTH).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { .. }));
    }

    #[test]
    fn invalid_xml_reports_markup_error() {
        let err = parse_document("<root><unclosed></root>", DEPTH).unwrap_err();
        assert!(matches!(err, ParseError::InvalidMarkup { .. }));
    }
}
