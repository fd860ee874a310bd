//! The document renderer: a recursive dispatcher over the node model.
//!
//! Dispatch is an exhaustive match over the closed node union, with an
//! override table consulted first. The table, the entry registry, and the
//! annotator are all fixed at construction; rendering mutates nothing
//! outside its own call stack, so one `Renderer` can serve independent
//! documents concurrently.

use super::annotate::{EditAnnotator, EditContext, OverlayAnnotator};
use super::asset;
use super::entry::{EntryRegistry, EntryResolver};
use super::list::normalize_list_item;
use super::rendered::{RenderedChild, RenderedNode};
use crate::model::{Document, DocumentNode, InlineNode, ListItem, NodeTag};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Replacement transform for one block node tag.
pub type NodeTransform =
    Arc<dyn Fn(&Renderer, &DocumentNode, &EditContext) -> Vec<RenderedChild> + Send + Sync>;

/// Replacement transform for one inline node tag.
pub type InlineTransform =
    Arc<dyn Fn(&Renderer, &InlineNode, &EditContext) -> Vec<RenderedChild> + Send + Sync>;

/// Converts documents into presentation trees.
///
/// Build one with [`Renderer::builder`] (or [`Renderer::new`] for the
/// defaults) and reuse it across documents.
pub struct Renderer {
    overrides: HashMap<NodeTag, NodeTransform>,
    inline_overrides: HashMap<NodeTag, InlineTransform>,
    entries: EntryRegistry,
    annotator: Arc<dyn EditAnnotator>,
}

impl Renderer {
    /// Create a renderer with default transforms, the default entry
    /// registry, and the overlay annotator.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized renderer.
    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    /// The annotator in use.
    pub fn annotator(&self) -> &dyn EditAnnotator {
        self.annotator.as_ref()
    }

    /// The entry registry in use.
    pub fn entries(&self) -> &EntryRegistry {
        &self.entries
    }

    /// Render a whole document under one edit context.
    ///
    /// The context is fixed for the document instance: every top-level block
    /// is annotated with it, descendants are not.
    pub fn render_document(&self, doc: &Document, ctx: &EditContext) -> Vec<RenderedChild> {
        doc.content
            .iter()
            .flat_map(|node| self.render_node(node, ctx))
            .collect()
    }

    /// Render one field's document, constructing the edit context from the
    /// owning entry and field ids.
    pub fn render_field(
        &self,
        doc: &Document,
        entry_id: &str,
        field_id: &str,
    ) -> Vec<RenderedChild> {
        self.render_document(doc, &EditContext::new(entry_id, field_id))
    }

    /// Render a single block node, annotating its top-level element.
    pub fn render_node(&self, node: &DocumentNode, ctx: &EditContext) -> Vec<RenderedChild> {
        self.render_block(node, ctx, true)
    }

    /// Render a single inline node. Inline output never carries edit
    /// annotations.
    pub fn render_inline(&self, inline: &InlineNode, ctx: &EditContext) -> Vec<RenderedChild> {
        if let Some(transform) = self.inline_overrides.get(&inline.tag()) {
            return transform(self, inline, ctx);
        }

        match inline {
            InlineNode::Text { value } => vec![RenderedChild::Text(value.clone())],
            InlineNode::Hyperlink { uri, content } => vec![RenderedChild::Node(
                RenderedNode::new("a")
                    .with_attr("href", uri.clone())
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
                    .with_children(self.render_inlines(content, ctx)),
            )],
            InlineNode::EmbeddedEntry { target } => self
                .entries
                .resolve_inline(target.as_ref())
                .into_iter()
                .collect(),
            InlineNode::Unknown { tag, content } => {
                if !tag.is_empty() {
                    debug!("passing through unrecognized inline tag `{}`", tag);
                }
                self.render_inlines(content, ctx)
            }
        }
    }

    pub(crate) fn render_inlines(
        &self,
        inlines: &[InlineNode],
        ctx: &EditContext,
    ) -> Vec<RenderedChild> {
        inlines
            .iter()
            .flat_map(|inline| self.render_inline(inline, ctx))
            .collect()
    }

    /// Render nested blocks without attaching annotations.
    pub(crate) fn render_blocks(
        &self,
        nodes: &[DocumentNode],
        ctx: &EditContext,
    ) -> Vec<RenderedChild> {
        nodes
            .iter()
            .flat_map(|node| self.render_block(node, ctx, false))
            .collect()
    }

    fn render_block(
        &self,
        node: &DocumentNode,
        ctx: &EditContext,
        annotate: bool,
    ) -> Vec<RenderedChild> {
        if let Some(transform) = self.overrides.get(&node.tag()) {
            return transform(self, node, ctx);
        }

        match node {
            DocumentNode::Paragraph { content } => {
                let p = RenderedNode::new("p").with_children(self.render_inlines(content, ctx));
                vec![RenderedChild::Node(self.maybe_annotate(p, ctx, annotate))]
            }
            DocumentNode::Heading { level, content } => {
                let heading = RenderedNode::new(level.tag())
                    .with_children(self.render_inlines(content, ctx));
                vec![RenderedChild::Node(
                    self.maybe_annotate(heading, ctx, annotate),
                )]
            }
            DocumentNode::UnorderedList { items } => vec![RenderedChild::Node(
                self.render_list(items, false, false, ctx, annotate),
            )],
            DocumentNode::OrderedList { items } => vec![RenderedChild::Node(
                self.render_list(items, true, false, ctx, annotate),
            )],
            DocumentNode::Table { rows } => {
                let mut tbody = RenderedNode::new("tbody");
                for row in rows {
                    let mut tr = RenderedNode::new("tr");
                    for cell in &row.cells {
                        let tag = if cell.is_header { "th" } else { "td" };
                        tr = tr.with_child(
                            RenderedNode::new(tag)
                                .with_children(self.render_blocks(&cell.content, ctx)),
                        );
                    }
                    tbody = tbody.with_child(tr);
                }
                let table = RenderedNode::new("table")
                    .with_class("case-study-table")
                    .with_child(tbody);
                vec![RenderedChild::Node(
                    RenderedNode::new("div")
                        .with_class("table-container")
                        .with_child(self.maybe_annotate(table, ctx, annotate)),
                )]
            }
            DocumentNode::Blockquote { content } => {
                let quote = RenderedNode::new("blockquote")
                    .with_class("custom-blockquote")
                    .with_children(self.render_blocks(content, ctx));
                vec![RenderedChild::Node(
                    self.maybe_annotate(quote, ctx, annotate),
                )]
            }
            DocumentNode::EmbeddedAsset { target } => {
                let ctx = if annotate { Some(ctx) } else { None };
                vec![RenderedChild::Node(asset::render_asset_figure(
                    target.as_ref(),
                    ctx,
                    self.annotator(),
                ))]
            }
            DocumentNode::EmbeddedEntry { target } => self
                .entries
                .resolve_block(target.as_ref(), ctx, self.annotator())
                .map(RenderedChild::Node)
                .into_iter()
                .collect(),
            DocumentNode::Unknown { tag, content } => {
                if !tag.is_empty() {
                    debug!("passing through unrecognized block tag `{}`", tag);
                }
                // Fallback arm: flatten rendered children into the parent;
                // a childless unknown node drops silently.
                self.render_blocks(content, ctx)
            }
        }
    }

    pub(crate) fn render_list(
        &self,
        items: &[ListItem],
        ordered: bool,
        nested: bool,
        ctx: &EditContext,
        annotate: bool,
    ) -> RenderedNode {
        let tag = if ordered { "ol" } else { "ul" };
        let class = if nested {
            "nested-list"
        } else if ordered {
            "custom-ordered-list"
        } else {
            "custom-unordered-list"
        };

        let mut list = RenderedNode::new(tag).with_class(class);
        list = self.maybe_annotate(list, ctx, annotate);
        for item in items {
            list = list.with_child(
                RenderedNode::new("li")
                    .with_class("custom-list-item")
                    .with_children(normalize_list_item(self, item, ctx)),
            );
        }
        list
    }

    fn maybe_annotate(
        &self,
        node: RenderedNode,
        ctx: &EditContext,
        annotate: bool,
    ) -> RenderedNode {
        if annotate {
            node.with_attrs(self.annotator.annotate(ctx))
        } else {
            node
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder assembling a renderer's immutable configuration: per-tag
/// overrides merged over the default dispatch, entry resolvers, and the
/// annotator.
pub struct RendererBuilder {
    overrides: HashMap<NodeTag, NodeTransform>,
    inline_overrides: HashMap<NodeTag, InlineTransform>,
    entries: EntryRegistry,
    annotator: Arc<dyn EditAnnotator>,
}

impl RendererBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            inline_overrides: HashMap::new(),
            entries: EntryRegistry::with_defaults(),
            annotator: Arc::new(OverlayAnnotator::new()),
        }
    }

    /// Override the transform for one block node tag. The override fully
    /// controls its output, including any edit annotation.
    pub fn override_node<F>(mut self, tag: NodeTag, transform: F) -> Self
    where
        F: Fn(&Renderer, &DocumentNode, &EditContext) -> Vec<RenderedChild>
            + Send
            + Sync
            + 'static,
    {
        self.overrides.insert(tag, Arc::new(transform));
        self
    }

    /// Override the transform for one inline node tag.
    pub fn override_inline<F>(mut self, tag: NodeTag, transform: F) -> Self
    where
        F: Fn(&Renderer, &InlineNode, &EditContext) -> Vec<RenderedChild> + Send + Sync + 'static,
    {
        self.inline_overrides.insert(tag, Arc::new(transform));
        self
    }

    /// Replace the annotator.
    pub fn with_annotator(mut self, annotator: Arc<dyn EditAnnotator>) -> Self {
        self.annotator = annotator;
        self
    }

    /// Register an additional entry resolver.
    pub fn with_entry_resolver(mut self, resolver: Arc<dyn EntryResolver>) -> Self {
        self.entries.register(resolver);
        self
    }

    /// Replace the entry registry wholesale.
    pub fn with_entry_registry(mut self, entries: EntryRegistry) -> Self {
        self.entries = entries;
        self
    }

    /// Finish building.
    pub fn build(self) -> Renderer {
        Renderer {
            overrides: self.overrides,
            inline_overrides: self.inline_overrides,
            entries: self.entries,
            annotator: self.annotator,
        }
    }
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}
