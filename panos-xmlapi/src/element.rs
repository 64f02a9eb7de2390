use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A PAN-OS configuration element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigElement {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements.
    pub children: Vec<ConfigElement>,
    /// Optional text content.
    pub text: Option<String>,
}

impl ConfigElement {
    /// Create a new element with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create an `<entry name="...">` element, the container PAN-OS uses for
    /// every named configuration object.
    pub fn entry(name: &str) -> Self {
        let mut node = Self::new("entry");
        node.attributes.insert("name".to_string(), name.to_string());
        node
    }

    /// Create a leaf element holding text content.
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.text = Some(text.into());
        node
    }

    /// Append a child element, returning the modified element.
    pub fn child(mut self, child: ConfigElement) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element if present.
    pub fn maybe_child(mut self, child: Option<ConfigElement>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&ConfigElement> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Walk a nested child path and return terminal element text if found.
    pub fn get_text<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        if path.is_empty() {
            return self.text.as_deref();
        }

        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        current.text.as_deref()
    }
}

impl Display for ConfigElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }

        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }

        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", text)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
