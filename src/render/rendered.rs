//! Presentation-tree output types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A child of a rendered node: either a nested element or a bare text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedChild {
    /// A text run
    Text(String),
    /// A nested element
    Node(RenderedNode),
}

impl RenderedChild {
    /// Borrow the nested element, if this child is one.
    pub fn as_node(&self) -> Option<&RenderedNode> {
        match self {
            RenderedChild::Node(node) => Some(node),
            RenderedChild::Text(_) => None,
        }
    }

    /// Borrow the text run, if this child is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedChild::Text(text) => Some(text),
            RenderedChild::Node(_) => None,
        }
    }
}

impl From<RenderedNode> for RenderedChild {
    fn from(node: RenderedNode) -> Self {
        RenderedChild::Node(node)
    }
}

impl From<String> for RenderedChild {
    fn from(text: String) -> Self {
        RenderedChild::Text(text)
    }
}

impl From<&str> for RenderedChild {
    fn from(text: &str) -> Self {
        RenderedChild::Text(text.to_string())
    }
}

/// An element of the presentation tree.
///
/// The consuming presentation layer is responsible for final markup and
/// styling; it must accept the `attributes` bag verbatim, including absent
/// edit annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedNode {
    /// Element tag (e.g. "p", "h2", "figure")
    pub tag: String,

    /// Attribute bag, possibly carrying an edit-context annotation
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    /// Child elements and text runs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedChild>,
}

impl RenderedNode {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    /// Set a single attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Merge an attribute bag into this element.
    pub fn with_attrs(mut self, attrs: Map<String, Value>) -> Self {
        self.attributes.extend(attrs);
        self
    }

    /// Set the `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class.into())
    }

    /// Append a child element.
    pub fn with_child(mut self, child: impl Into<RenderedChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(RenderedChild::Text(text.into()))
    }

    /// Append multiple children.
    pub fn with_children(mut self, children: Vec<RenderedChild>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Concatenated text content of this element and its descendants.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|child| match child {
                RenderedChild::Text(text) => text.clone(),
                RenderedChild::Node(node) => node.plain_text(),
            })
            .collect()
    }
}

/// JSON output format for the presentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a rendered tree (or any part of it) to JSON.
pub fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
