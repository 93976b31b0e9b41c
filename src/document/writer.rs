//! Whole-document serializer
//!
//! Renders an element tree back to markup: declaration header, UTF-8,
//! two-space indentation, attributes as key="value", text inline within
//! its element, childless text-less elements self-closed.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::errors::{DocumentError, DocumentResult};
use super::node::Element;

/// Serialize a root element as a complete document.
pub fn serialize(root: &Element) -> DocumentResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Serialize(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> DocumentResult<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().filter(|t| !t.is_empty());
    if text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| DocumentError::Serialize(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    if let Some(text) = text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
        .map_err(|e| DocumentError::Serialize(e.to_string()))
}
