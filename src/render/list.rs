//! List-item normalization.
//!
//! Content authors wrap list-item text in a paragraph, which would put a
//! block-level wrapper inside list markup. The normalizer unwraps that
//! paragraph and renders nested lists with a distinct class so callers can
//! style nesting depth.

use super::annotate::EditContext;
use super::renderer::Renderer;
use super::rendered::{RenderedChild, RenderedNode};
use crate::model::{DocumentNode, ListItem};

/// Produce the rendered content of one list item.
///
/// - A sole wrapping paragraph is unwrapped: its inline content is emitted
///   directly.
/// - Nested lists render as genuine nested `ul`/`ol` elements carrying the
///   `nested-list` class instead of the top-level list class.
/// - Paragraphs alongside other children collapse to `span` so no block
///   wrapper appears inside the item.
/// - Anything else renders unchanged through the document renderer.
pub fn normalize_list_item(
    renderer: &Renderer,
    item: &ListItem,
    ctx: &EditContext,
) -> Vec<RenderedChild> {
    if let [DocumentNode::Paragraph { content }] = item.content.as_slice() {
        return renderer.render_inlines(content, ctx);
    }

    let mut out = Vec::new();
    for child in &item.content {
        match child {
            DocumentNode::Paragraph { content } => {
                out.push(RenderedChild::Node(
                    RenderedNode::new("span")
                        .with_children(renderer.render_inlines(content, ctx)),
                ));
            }
            DocumentNode::UnorderedList { items } => {
                out.push(RenderedChild::Node(
                    renderer.render_list(items, false, true, ctx, false),
                ));
            }
            DocumentNode::OrderedList { items } => {
                out.push(RenderedChild::Node(
                    renderer.render_list(items, true, true, ctx, false),
                ));
            }
            other => out.extend(renderer.render_blocks(std::slice::from_ref(other), ctx)),
        }
    }
    out
}
