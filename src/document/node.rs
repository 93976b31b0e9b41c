//! In-memory element tree
//!
//! A document is a single root [`Element`]; children preserve insertion
//! order and attribute keys are unique per element.

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,

    /// Attributes in insertion order. Keys are unique; use
    /// [`Element::set_attribute`] to keep them that way.
    attributes: Vec<(String, String)>,

    /// Text content preceding any child elements.
    pub text: Option<String>,

    /// Child elements in insertion order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes, text, or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value for the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder form of setting the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Look up an attribute value by key.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let element = Element::new("item")
            .with_attribute("id", "1")
            .with_text("first");

        assert_eq!(element.tag, "item");
        assert_eq!(element.get_attribute("id"), Some("1"));
        assert_eq!(element.text.as_deref(), Some("first"));
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_set_attribute_replaces_existing_key() {
        let mut element = Element::new("item");
        element.set_attribute("id", "1");
        element.set_attribute("kind", "a");
        element.set_attribute("id", "2");

        assert_eq!(element.attributes().len(), 2);
        assert_eq!(element.get_attribute("id"), Some("2"));
        // Replacement keeps the original position
        assert_eq!(element.attributes()[0].0, "id");
    }

    #[test]
    fn test_get_attribute_missing() {
        let element = Element::new("item");
        assert_eq!(element.get_attribute("id"), None);
    }
}
