//! XML structural conversion.
//!
//! Two stages: quick-xml's event stream is first materialized into a small
//! DOM ([`XmlNode`]), then [`convert`] folds that DOM into a [`TreeValue`]
//! with the normalization rules the viewer displays:
//!
//! - attributes become `@name` keys
//! - an element whose only child is non-empty text collapses to that text
//! - mixed text is stored under the literal key `#text`
//! - sibling elements sharing a tag name fold into an array, in document
//!   order
//! - an element with no attributes and no children is an empty object,
//!   never null (downstream branches on object-vs-scalar)
//!
//! Well-formedness failures and the nesting depth guard are raised here
//! during DOM building; `convert` itself is total.

use crate::model::{ParseError, TreeValue};
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed XML node: element or text.
///
/// Whitespace-only text nodes are kept because the single-child collapse
/// rule in [`convert`] counts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// An element with its attributes and children in document order.
    Element {
        /// Tag name.
        name: String,
        /// Attributes in document order.
        attributes: Vec<(String, String)>,
        /// Child nodes (elements and text) in document order.
        children: Vec<XmlNode>,
    },
    /// A text or CDATA node, unescaped but not trimmed.
    Text(String),
}

/// Parse XML text into a tree, enforcing `max_depth` element nesting.
///
/// # Errors
///
/// [`ParseError::InvalidMarkup`] for anything quick-xml rejects (mismatched
/// or unclosed tags, bad entities), for documents without exactly one root
/// element, and for nesting deeper than `max_depth`.
pub fn parse(input: &str, max_depth: usize) -> Result<TreeValue, ParseError> {
    let root = build_dom(input, max_depth)?;
    Ok(convert(&root))
}

fn markup_error(message: impl Into<String>) -> ParseError {
    ParseError::InvalidMarkup {
        message: message.into(),
    }
}

/// Materialize the event stream into an [`XmlNode`] tree.
///
/// Comments, processing instructions, the XML declaration, and DOCTYPE are
/// dropped; they carry no data the viewer shows and do not count as
/// children for the single-child collapse rule.
fn build_dom(input: &str, max_depth: usize) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_str(input);
    // Open elements being built; the element under construction is last.
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| markup_error(format!("{err} at position {}", reader.buffer_position())))?;
        match event {
            Event::Start(start) => {
                if stack.len() >= max_depth {
                    return Err(markup_error(format!(
                        "element nesting exceeds {max_depth} levels"
                    )));
                }
                if root.is_some() && stack.is_empty() {
                    return Err(markup_error("multiple root elements"));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                if root.is_some() && stack.is_empty() {
                    return Err(markup_error("multiple root elements"));
                }
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                // quick-xml has already checked the tag name matches.
                let element = stack.pop().ok_or_else(|| markup_error("unexpected end tag"))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                let content = text
                    .unescape()
                    .map_err(|err| markup_error(err.to_string()))?
                    .into_owned();
                append_text(&mut stack, root.is_some(), content)?;
            }
            Event::CData(cdata) => {
                let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                append_text(&mut stack, root.is_some(), content)?;
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(markup_error("unclosed element at end of input"));
    }
    root.ok_or_else(|| markup_error("no root element"))
}

fn element_from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode, ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|err| markup_error(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| markup_error(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(XmlNode::Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Attach a completed node to its parent, or record it as the root.
fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(XmlNode::Element { children, .. }) => children.push(node),
        _ => *root = Some(node),
    }
}

fn append_text(stack: &mut [XmlNode], have_root: bool, content: String) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(XmlNode::Element { children, .. }) => {
            children.push(XmlNode::Text(content));
            Ok(())
        }
        _ => {
            // Whitespace between/around root elements is fine; data is not.
            if content.trim().is_empty() {
                Ok(())
            } else if have_root {
                Err(markup_error("text after root element"))
            } else {
                Err(markup_error("text before root element"))
            }
        }
    }
}

/// Fold a DOM node into a [`TreeValue`].
///
/// Total over its input; recursion depth is bounded by the `max_depth`
/// check in DOM building.
pub fn convert(node: &XmlNode) -> TreeValue {
    match node {
        XmlNode::Text(text) => TreeValue::String(text.trim().to_string()),
        XmlNode::Element {
            attributes,
            children,
            ..
        } => {
            let mut entries: Vec<(String, TreeValue)> = attributes
                .iter()
                .map(|(name, value)| (format!("@{name}"), TreeValue::String(value.clone())))
                .collect();

            for child in children {
                match child {
                    XmlNode::Text(text) => {
                        let trimmed = text.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        // A lone text child means the element is a leaf;
                        // collapse it to the text itself.
                        if children.len() == 1 {
                            return TreeValue::String(trimmed.to_string());
                        }
                        insert_entry(
                            &mut entries,
                            "#text",
                            TreeValue::String(trimmed.to_string()),
                        );
                    }
                    XmlNode::Element { name, .. } => {
                        let converted = convert(child);
                        insert_entry(&mut entries, name, converted);
                    }
                }
            }

            TreeValue::Object(entries)
        }
    }
}

/// Insert under `key`, folding repeated keys into an array.
///
/// First repeat promotes the existing value to a one-element array, then
/// every occurrence appends, preserving document order.
fn insert_entry(entries: &mut Vec<(String, TreeValue)>, key: &str, value: TreeValue) {
    match entries.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, TreeValue::Array(items))) => items.push(value),
        Some((_, existing)) => {
            let first = std::mem::replace(existing, TreeValue::Null);
            *existing = TreeValue::Array(vec![first, value]);
        }
        None => entries.push((key.to_string(), value)),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
