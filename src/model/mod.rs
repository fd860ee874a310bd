//! Document model types for structured rich-text content.
//!
//! This module defines the intermediate representation that bridges the
//! content store's wire format and the presentation-tree renderer. The model
//! is a closed tagged union: every node kind the wire format can produce has
//! a variant, with `Unknown` catching tags outside the recognized set.

mod document;
mod node;
mod reference;

pub use document::Document;
pub use node::{
    DocumentNode, HeadingLevel, InlineNode, ListItem, NodeTag, TableCell, TableRow,
};
pub use reference::{AssetReference, EntryReference};
