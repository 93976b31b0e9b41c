//! Full-document parser
//!
//! Parses a complete document in one pass and returns its single root
//! element. A malformed input never yields a partial tree; the first
//! problem aborts the parse with a [`DocumentError::Parse`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::errors::{DocumentError, DocumentResult};
use super::node::Element;

/// Parse a complete document into its root element.
///
/// Requirements enforced here on top of well-formedness:
/// - exactly one root element
/// - no text content outside the root
///
/// Text after a child element (tail text) is not modeled and is ignored.
pub fn parse(input: &str) -> DocumentResult<Element> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.trim_text_start = true;
    config.trim_text_end = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                // Unmatched end tags are rejected by the reader before
                // we get here, so the stack cannot be empty.
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| DocumentError::Parse(e.to_string()))?;
                if value.is_empty() {
                    continue;
                }
                match stack.last_mut() {
                    Some(parent) => append_text(parent, &value),
                    None => {
                        return Err(DocumentError::Parse(
                            "text content outside of root element".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::CData(data)) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                match stack.last_mut() {
                    Some(parent) => append_text(parent, &value),
                    None => {
                        return Err(DocumentError::Parse(
                            "text content outside of root element".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::Decl(_)) | Ok(Event::Comment(_)) | Ok(Event::PI(_))
            | Ok(Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Parse(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(DocumentError::Parse(format!(
            "unclosed element <{}>",
            open.tag
        )));
    }
    root.ok_or_else(|| DocumentError::Parse("document has no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> DocumentResult<Element> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(tag);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| DocumentError::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| DocumentError::Parse(e.to_string()))?
            .into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}

/// Hand a completed element to its parent, or install it as the root.
fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> DocumentResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(DocumentError::Parse(
                    "unexpected second root element".to_string(),
                ));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

fn append_text(parent: &mut Element, value: &str) {
    // Only leading text is modeled; tail text after children is dropped.
    if !parent.children.is_empty() {
        return;
    }
    match &mut parent.text {
        Some(text) => text.push_str(value),
        None => parent.text = Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_document() {
        let root = parse("<data><item id=\"1\">first</item></data>").unwrap();

        assert_eq!(root.tag, "data");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "item");
        assert_eq!(root.children[0].get_attribute("id"), Some("1"));
        assert_eq!(root.children[0].text.as_deref(), Some("first"));
    }

    #[test]
    fn test_parse_with_declaration_and_indentation() {
        let input = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<data>\n  <item id=\"1\">first</item>\n  <item id=\"2\">second</item>\n</data>";
        let root = parse(input).unwrap();

        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].get_attribute("id"), Some("1"));
        assert_eq!(root.children[1].get_attribute("id"), Some("2"));
    }

    #[test]
    fn test_parse_nested_elements_preserve_order() {
        let root = parse("<a><b/><c><d/></c><e/></a>").unwrap();

        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["b", "c", "e"]);
        assert_eq!(root.children[1].children[0].tag, "d");
    }

    #[test]
    fn test_parse_self_closing_root() {
        let root = parse("<data/>").unwrap();
        assert_eq!(root.tag, "data");
        assert!(root.children.is_empty());
        assert!(root.text.is_none());
    }

    #[test]
    fn test_parse_escaped_text_and_attributes() {
        let root = parse("<a name=\"x &amp; y\">1 &lt; 2</a>").unwrap();
        assert_eq!(root.get_attribute("name"), Some("x & y"));
        assert_eq!(root.text.as_deref(), Some("1 < 2"));
    }

    #[test]
    fn test_parse_unclosed_tag_fails() {
        let err = parse("<data><item>unclosed").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
        assert!(err.to_string().starts_with("parse error:"));
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: document has no root element"
        );
    }

    #[test]
    fn test_parse_second_root_fails() {
        let err = parse("<a/><b/>").unwrap_err();
        assert!(err.to_string().contains("second root"));
    }

    #[test]
    fn test_parse_mismatched_end_tag_fails() {
        let err = parse("<a><b></a></b>").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
