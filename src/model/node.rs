//! Block and inline node types.

use super::{AssetReference, EntryReference};
use serde::{Deserialize, Serialize};

/// Heading level supported by the document schema.
///
/// The schema only produces levels 2 through 4; level 1 is reserved for the
/// page title outside the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
}

impl HeadingLevel {
    /// Numeric depth (2-4).
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// Output element tag for this level.
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }

    /// Convert a numeric depth to a level.
    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            _ => None,
        }
    }
}

/// A block-level node in the document tree.
///
/// The union is closed: wire tags outside the recognized set parse into
/// `Unknown`, which renders as a pass-through of its children. That keeps
/// dispatch total without an open-ended string lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DocumentNode {
    /// A paragraph of inline content
    Paragraph {
        /// Inline children
        content: Vec<InlineNode>,
    },

    /// A heading (levels 2-4)
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Inline children
        content: Vec<InlineNode>,
    },

    /// An unordered (bulleted) list
    UnorderedList {
        /// List items
        items: Vec<ListItem>,
    },

    /// An ordered (numbered) list
    OrderedList {
        /// List items
        items: Vec<ListItem>,
    },

    /// A table
    Table {
        /// Table rows
        rows: Vec<TableRow>,
    },

    /// A block quotation
    Blockquote {
        /// Block children
        content: Vec<DocumentNode>,
    },

    /// An embedded media asset
    EmbeddedAsset {
        /// Referenced asset, `None` when the reference is broken
        target: Option<AssetReference>,
    },

    /// An embedded content entry
    EmbeddedEntry {
        /// Referenced entry, `None` when the reference is broken
        target: Option<EntryReference>,
    },

    /// A block with an unrecognized wire tag
    Unknown {
        /// The wire tag as received
        tag: String,
        /// Block children, rendered pass-through
        content: Vec<DocumentNode>,
    },
}

impl DocumentNode {
    /// Create a paragraph node.
    pub fn paragraph(content: Vec<InlineNode>) -> Self {
        DocumentNode::Paragraph { content }
    }

    /// Create a paragraph containing a single text run.
    pub fn text_paragraph(text: impl Into<String>) -> Self {
        DocumentNode::Paragraph {
            content: vec![InlineNode::text(text)],
        }
    }

    /// Create a heading node.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        DocumentNode::Heading {
            level,
            content: vec![InlineNode::text(text)],
        }
    }

    /// Dispatch tag for this node.
    pub fn tag(&self) -> NodeTag {
        match self {
            DocumentNode::Paragraph { .. } => NodeTag::Paragraph,
            DocumentNode::Heading { level, .. } => match level {
                HeadingLevel::H2 => NodeTag::Heading2,
                HeadingLevel::H3 => NodeTag::Heading3,
                HeadingLevel::H4 => NodeTag::Heading4,
            },
            DocumentNode::UnorderedList { .. } => NodeTag::UnorderedList,
            DocumentNode::OrderedList { .. } => NodeTag::OrderedList,
            DocumentNode::Table { .. } => NodeTag::Table,
            DocumentNode::Blockquote { .. } => NodeTag::Blockquote,
            DocumentNode::EmbeddedAsset { .. } => NodeTag::EmbeddedAssetBlock,
            DocumentNode::EmbeddedEntry { .. } => NodeTag::EmbeddedEntryBlock,
            DocumentNode::Unknown { .. } => NodeTag::Unknown,
        }
    }

    /// Plain text content of this node and its descendants.
    pub fn plain_text(&self) -> String {
        fn inlines(content: &[InlineNode]) -> String {
            content.iter().map(InlineNode::plain_text).collect()
        }
        fn blocks(content: &[DocumentNode]) -> String {
            content
                .iter()
                .map(DocumentNode::plain_text)
                .collect::<Vec<_>>()
                .join("\n")
        }

        match self {
            DocumentNode::Paragraph { content } | DocumentNode::Heading { content, .. } => {
                inlines(content)
            }
            DocumentNode::UnorderedList { items } | DocumentNode::OrderedList { items } => items
                .iter()
                .map(|item| blocks(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
            DocumentNode::Table { rows } => rows
                .iter()
                .map(|row| {
                    row.cells
                        .iter()
                        .map(|cell| blocks(&cell.content))
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect::<Vec<_>>()
                .join("\n"),
            DocumentNode::Blockquote { content } | DocumentNode::Unknown { content, .. } => {
                blocks(content)
            }
            DocumentNode::EmbeddedAsset { .. } | DocumentNode::EmbeddedEntry { .. } => {
                String::new()
            }
        }
    }
}

/// An inline node within a paragraph, heading, or hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineNode {
    /// A run of text
    Text {
        /// Text content
        value: String,
    },

    /// A hyperlink wrapping inline content
    Hyperlink {
        /// Link target URI
        uri: String,
        /// Inline children
        content: Vec<InlineNode>,
    },

    /// An inline embedded content entry
    EmbeddedEntry {
        /// Referenced entry, `None` when the reference is broken
        target: Option<EntryReference>,
    },

    /// An inline with an unrecognized wire tag
    Unknown {
        /// The wire tag as received
        tag: String,
        /// Inline children, rendered pass-through
        content: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Create a text run.
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Text {
            value: value.into(),
        }
    }

    /// Create a hyperlink around a single text run.
    pub fn link(uri: impl Into<String>, text: impl Into<String>) -> Self {
        InlineNode::Hyperlink {
            uri: uri.into(),
            content: vec![InlineNode::text(text)],
        }
    }

    /// Dispatch tag for this node.
    pub fn tag(&self) -> NodeTag {
        match self {
            InlineNode::Text { .. } => NodeTag::Text,
            InlineNode::Hyperlink { .. } => NodeTag::Hyperlink,
            InlineNode::EmbeddedEntry { .. } => NodeTag::EmbeddedEntryInline,
            InlineNode::Unknown { .. } => NodeTag::Unknown,
        }
    }

    /// Plain text content of this node and its descendants.
    pub fn plain_text(&self) -> String {
        match self {
            InlineNode::Text { value } => value.clone(),
            InlineNode::Hyperlink { content, .. } | InlineNode::Unknown { content, .. } => {
                content.iter().map(InlineNode::plain_text).collect()
            }
            InlineNode::EmbeddedEntry { .. } => String::new(),
        }
    }
}

/// A single list item. Its children are block-level nodes; content authors
/// usually wrap item text in a paragraph, which the list normalizer unwraps
/// at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Block children
    pub content: Vec<DocumentNode>,
}

impl ListItem {
    /// Create a list item from block children.
    pub fn new(content: Vec<DocumentNode>) -> Self {
        Self { content }
    }

    /// Create a list item holding a single text paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![DocumentNode::text_paragraph(text)],
        }
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell, either a header or a body cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Whether this is a header cell (`<th>`)
    pub is_header: bool,

    /// Block children
    pub content: Vec<DocumentNode>,
}

impl TableCell {
    /// Create a body cell.
    pub fn body(content: Vec<DocumentNode>) -> Self {
        Self {
            is_header: false,
            content,
        }
    }

    /// Create a header cell.
    pub fn header(content: Vec<DocumentNode>) -> Self {
        Self {
            is_header: true,
            content,
        }
    }
}

/// Dispatch key for the renderer's override table, one per recognized node
/// kind plus a catch-all for unrecognized wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// `paragraph`
    Paragraph,
    /// `heading-2`
    Heading2,
    /// `heading-3`
    Heading3,
    /// `heading-4`
    Heading4,
    /// `unordered-list`
    UnorderedList,
    /// `ordered-list`
    OrderedList,
    /// `list-item`
    ListItem,
    /// `table`
    Table,
    /// `table-row`
    TableRow,
    /// `table-header-cell`
    TableHeaderCell,
    /// `table-cell`
    TableCell,
    /// `blockquote`
    Blockquote,
    /// `text`
    Text,
    /// `hyperlink`
    Hyperlink,
    /// `embedded-asset-block`
    EmbeddedAssetBlock,
    /// `embedded-entry-block`
    EmbeddedEntryBlock,
    /// `embedded-entry-inline`
    EmbeddedEntryInline,
    /// Any unrecognized wire tag
    Unknown,
}

impl NodeTag {
    /// The wire-format `nodeType` string for this tag.
    pub fn as_wire(&self) -> &'static str {
        match self {
            NodeTag::Paragraph => "paragraph",
            NodeTag::Heading2 => "heading-2",
            NodeTag::Heading3 => "heading-3",
            NodeTag::Heading4 => "heading-4",
            NodeTag::UnorderedList => "unordered-list",
            NodeTag::OrderedList => "ordered-list",
            NodeTag::ListItem => "list-item",
            NodeTag::Table => "table",
            NodeTag::TableRow => "table-row",
            NodeTag::TableHeaderCell => "table-header-cell",
            NodeTag::TableCell => "table-cell",
            NodeTag::Blockquote => "blockquote",
            NodeTag::Text => "text",
            NodeTag::Hyperlink => "hyperlink",
            NodeTag::EmbeddedAssetBlock => "embedded-asset-block",
            NodeTag::EmbeddedEntryBlock => "embedded-entry-block",
            NodeTag::EmbeddedEntryInline => "embedded-entry-inline",
            NodeTag::Unknown => "unknown",
        }
    }

    /// Parse a wire-format `nodeType` string.
    pub fn from_wire(tag: &str) -> Option<Self> {
        Some(match tag {
            "paragraph" => NodeTag::Paragraph,
            "heading-2" => NodeTag::Heading2,
            "heading-3" => NodeTag::Heading3,
            "heading-4" => NodeTag::Heading4,
            "unordered-list" => NodeTag::UnorderedList,
            "ordered-list" => NodeTag::OrderedList,
            "list-item" => NodeTag::ListItem,
            "table" => NodeTag::Table,
            "table-row" => NodeTag::TableRow,
            "table-header-cell" => NodeTag::TableHeaderCell,
            "table-cell" => NodeTag::TableCell,
            "blockquote" => NodeTag::Blockquote,
            "text" => NodeTag::Text,
            "hyperlink" => NodeTag::Hyperlink,
            "embedded-asset-block" => NodeTag::EmbeddedAssetBlock,
            "embedded-entry-block" => NodeTag::EmbeddedEntryBlock,
            "embedded-entry-inline" => NodeTag::EmbeddedEntryInline,
            _ => return None,
        })
    }
}
