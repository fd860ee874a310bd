//! Embedded-entry resolution: dispatch by content-type tag.
//!
//! Embedded entries point at other content entries; what they render as
//! depends on the entry's content type. Resolvers are registered in an
//! [`EntryRegistry`] keyed by the content-type tag, built once at renderer
//! construction.
//!
//! Two failure conditions are deliberately distinct: a *missing* target
//! (broken reference) renders nothing, while an *unknown* content type
//! renders a visible diagnostic placeholder. Operators can then tell "wrong
//! type registered" from "broken reference" during triage.

use super::annotate::{EditAnnotator, EditContext};
use super::asset::resolve_asset_url;
use super::rendered::{RenderedChild, RenderedNode};
use crate::model::EntryReference;
use crate::parser;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Text of the diagnostic placeholder rendered for an entry whose content
/// type has no registered resolver.
pub const UNKNOWN_ENTRY_TEXT: &str = "Unknown embedded entry type";

/// Resolves embedded entries of one content type into presentation nodes.
///
/// Implement this trait to support a new content type and register the
/// resolver on the renderer builder.
pub trait EntryResolver: Send + Sync {
    /// The content-type tag this resolver handles.
    fn content_type(&self) -> &str;

    /// Render the block form of an embedded entry.
    fn resolve_block(
        &self,
        entry: &EntryReference,
        ctx: &EditContext,
        annotator: &dyn EditAnnotator,
    ) -> RenderedNode;

    /// Render the inline form of an embedded entry.
    ///
    /// Inline embedding intentionally carries less fidelity than block
    /// embedding; the default renders nothing.
    fn resolve_inline(&self, entry: &EntryReference) -> Option<RenderedChild> {
        let _ = entry;
        None
    }
}

/// Registry mapping content-type tags to resolvers.
pub struct EntryRegistry {
    resolvers: HashMap<String, Arc<dyn EntryResolver>>,
}

impl EntryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Create a registry with the default resolvers (image gallery).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GalleryResolver::new()));
        registry
    }

    /// Register a resolver under its content-type tag.
    pub fn register(&mut self, resolver: Arc<dyn EntryResolver>) {
        self.resolvers
            .insert(resolver.content_type().to_string(), resolver);
    }

    /// Get the resolver for a content-type tag.
    pub fn get(&self, content_type: &str) -> Option<&Arc<dyn EntryResolver>> {
        self.resolvers.get(content_type)
    }

    /// Check whether a content type is registered.
    pub fn supports(&self, content_type: &str) -> bool {
        self.resolvers.contains_key(content_type)
    }

    /// All registered content-type tags.
    pub fn registered_types(&self) -> Vec<&str> {
        self.resolvers.keys().map(String::as_str).collect()
    }

    /// Resolve the block form of an embedded entry.
    ///
    /// A missing target renders nothing; an unknown content type renders the
    /// fixed diagnostic placeholder.
    pub fn resolve_block(
        &self,
        target: Option<&EntryReference>,
        ctx: &EditContext,
        annotator: &dyn EditAnnotator,
    ) -> Option<RenderedNode> {
        let entry = match target {
            Some(entry) => entry,
            None => {
                debug!("embedded entry block without target, rendering nothing");
                return None;
            }
        };

        match self.get(&entry.content_type) {
            Some(resolver) => Some(resolver.resolve_block(entry, ctx, annotator)),
            None => {
                warn!(
                    "no resolver registered for embedded entry content type `{}`",
                    entry.content_type
                );
                Some(unknown_entry_placeholder())
            }
        }
    }

    /// Resolve the inline form of an embedded entry.
    pub fn resolve_inline(&self, target: Option<&EntryReference>) -> Option<RenderedChild> {
        let entry = match target {
            Some(entry) => entry,
            None => {
                debug!("inline embedded entry without target, rendering nothing");
                return None;
            }
        };

        match self.get(&entry.content_type) {
            Some(resolver) => resolver.resolve_inline(entry),
            None => {
                warn!(
                    "no resolver registered for inline embedded entry content type `{}`",
                    entry.content_type
                );
                Some(RenderedChild::Node(
                    RenderedNode::new("span")
                        .with_class("entry-fallback")
                        .with_text(UNKNOWN_ENTRY_TEXT),
                ))
            }
        }
    }
}

impl Default for EntryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn unknown_entry_placeholder() -> RenderedNode {
    RenderedNode::new("div")
        .with_class("entry-fallback")
        .with_text(UNKNOWN_ENTRY_TEXT)
}

/// Resolver for the `imageGallery` content type.
///
/// Block form: fields `{ images: [asset link], showCaptions: bool }` render
/// as a grid of zoomable images, each item annotated with an edit context
/// derived from its own asset id. Inline form: fields `{ title, media }`
/// render as a minimal thumbnail strip with no captions and no annotation.
#[derive(Debug, Clone, Default)]
pub struct GalleryResolver;

impl GalleryResolver {
    /// Create a new gallery resolver.
    pub fn new() -> Self {
        Self
    }
}

impl EntryResolver for GalleryResolver {
    fn content_type(&self) -> &str {
        "imageGallery"
    }

    fn resolve_block(
        &self,
        entry: &EntryReference,
        _ctx: &EditContext,
        annotator: &dyn EditAnnotator,
    ) -> RenderedNode {
        let show_captions = entry.bool_field("showCaptions");

        let mut grid = RenderedNode::new("div").with_class("image-grid");
        if let Some(images) = entry.array_field("images") {
            for link in images {
                let asset = parser::asset_from_link(link);
                let asset_id = parser::link_id(link);

                let mut item = RenderedNode::new("div").with_class("gallery-item");
                if let Some(id) = asset_id {
                    item = item.with_attrs(annotator.annotate(&EditContext::new(id, "file")));
                }

                let mut figure = RenderedNode::new("figure");
                match resolve_asset_url(asset.as_ref()) {
                    Some(url) => {
                        let mut img = RenderedNode::new("img")
                            .with_class("gallery-img")
                            .with_attr("src", url)
                            .with_attr("data-zoomable", true);
                        if let Some(alt) = asset.as_ref().and_then(|a| a.caption()) {
                            img = img.with_attr("alt", alt);
                        }
                        figure = figure.with_child(img);
                    }
                    None => {
                        figure = figure.with_child(
                            RenderedNode::new("div")
                                .with_class("asset-placeholder")
                                .with_text(super::asset::ASSET_PROCESSING_TEXT),
                        );
                    }
                }

                if show_captions {
                    if let Some(asset) = asset.as_ref() {
                        if let Some(caption) = asset.caption() {
                            // Annotate with whichever field supplied the text.
                            let field = if asset.description.is_some() {
                                "description"
                            } else {
                                "title"
                            };
                            let mut figcaption = RenderedNode::new("figcaption")
                                .with_class("asset-caption")
                                .with_text(caption);
                            if let Some(id) = asset_id {
                                figcaption = figcaption
                                    .with_attrs(annotator.annotate(&EditContext::new(id, field)));
                            }
                            figure = figure.with_child(figcaption);
                        }
                    }
                }

                grid = grid.with_child(item.with_child(figure));
            }
        }

        RenderedNode::new("section")
            .with_class("image-gallery")
            .with_attrs(annotator.annotate(&EditContext::new(entry.id.clone(), "images")))
            .with_child(grid)
    }

    fn resolve_inline(&self, entry: &EntryReference) -> Option<RenderedChild> {
        let urls: Vec<String> = entry
            .array_field("media")
            .map(|media| {
                media
                    .iter()
                    .filter_map(|link| resolve_asset_url(parser::asset_from_link(link).as_ref()))
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            return None;
        }

        let mut strip = RenderedNode::new("span").with_class("inline-gallery");
        if let Some(title) = entry.string_field("title") {
            strip = strip.with_child(
                RenderedNode::new("span")
                    .with_class("inline-gallery-title")
                    .with_text(title),
            );
        }
        for url in urls {
            strip = strip.with_child(
                RenderedNode::new("img")
                    .with_class("inline-gallery-thumb")
                    .with_attr("src", url)
                    .with_attr("loading", "lazy"),
            );
        }

        Some(RenderedChild::Node(strip))
    }
}
