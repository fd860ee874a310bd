//! # richtree
//!
//! Structured rich-text rendering library for Rust.
//!
//! This library converts a generic rich-text document (a typed tree of
//! block and inline nodes as produced by a structured-content store) into
//! a presentation tree, while normalizing irregular nesting, resolving
//! embedded entry references by content type, degrading gracefully when
//! referenced media is not yet available, and attaching edit-overlay
//! metadata at well-defined points.
//!
//! ## Quick Start
//!
//! ```
//! use richtree::{parse_document_str, EditContext, Renderer};
//!
//! fn main() -> richtree::Result<()> {
//!     let doc = parse_document_str(
//!         r#"{ "nodeType": "document", "content": [
//!             { "nodeType": "paragraph",
//!               "content": [{ "nodeType": "text", "value": "Hello" }] }
//!         ] }"#,
//!     )?;
//!
//!     let renderer = Renderer::new();
//!     let tree = renderer.render_document(&doc, &EditContext::new("entry1", "overview"));
//!     assert_eq!(tree.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total dispatch**: every node kind renders, with unrecognized tags
//!   passing their children through
//! - **Registry overrides**: per-tag transforms merged at construction
//! - **Embedded entries**: pluggable resolvers keyed by content type
//! - **Graceful degradation**: placeholders for processing assets and
//!   unknown entry types, omission for broken references
//! - **Edit overlays**: injectable annotator attaching context to exactly
//!   one element per field occurrence
//! - **Heading anchors**: pure slug derivation over the input tree
//!
//! The transform is synchronous and purely functional over its input: it
//! never fetches data mid-traversal, and a `Renderer` is safe to share
//! across threads for independent documents.

pub mod error;
pub mod model;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    AssetReference, Document, DocumentNode, EntryReference, HeadingLevel, InlineNode, ListItem,
    NodeTag, TableCell, TableRow,
};
pub use outline::{heading_anchors, slugify, HeadingAnchor};
pub use parser::{parse_document, parse_document_str};
pub use render::{
    resolve_asset_url, to_json, EditAnnotator, EditContext, EntryRegistry, EntryResolver,
    GalleryResolver, JsonFormat, NoopAnnotator, OverlayAnnotator, RenderedChild, RenderedNode,
    Renderer, RendererBuilder, ASSET_PROCESSING_TEXT, UNKNOWN_ENTRY_TEXT,
};

use std::path::Path;

/// Parse a document from a JSON file on disk.
///
/// # Example
///
/// ```no_run
/// let doc = richtree::parse_file("overview.json").unwrap();
/// println!("{} blocks", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let input = std::fs::read_to_string(path)?;
    parse_document_str(&input)
}

/// Render one field's document with a default renderer.
///
/// Convenience for the common case; build a [`Renderer`] directly to
/// customize transforms, entry resolvers, or the annotator.
///
/// # Example
///
/// ```
/// use richtree::{render_field, Document, DocumentNode};
///
/// let doc = Document::with_content(vec![DocumentNode::text_paragraph("Hi")]);
/// let tree = render_field(&doc, "entry1", "overview");
/// assert_eq!(tree.len(), 1);
/// ```
pub fn render_field(doc: &Document, entry_id: &str, field_id: &str) -> Vec<RenderedChild> {
    Renderer::new().render_field(doc, entry_id, field_id)
}
