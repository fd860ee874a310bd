//! Document-level types.

use super::DocumentNode;
use serde::{Deserialize, Serialize};

/// A structured rich-text document: an ordered sequence of block nodes.
///
/// One document corresponds to one field's value in the content store. The
/// tree is immutable for the duration of a render pass; a new fetch produces
/// a new document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level block nodes
    pub content: Vec<DocumentNode>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from block nodes.
    pub fn with_content(content: Vec<DocumentNode>) -> Self {
        Self { content }
    }

    /// Append a block node.
    pub fn add_node(&mut self, node: DocumentNode) {
        self.content.push(node);
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of top-level block nodes.
    pub fn node_count(&self) -> usize {
        self.content.len()
    }

    /// Plain text content of the whole document.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(DocumentNode::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
