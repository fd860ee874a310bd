//! Asset URL resolution and figure rendering.

use super::annotate::{EditAnnotator, EditContext};
use super::rendered::RenderedNode;
use crate::model::AssetReference;

/// Fallback text rendered in place of an asset whose file has not finished
/// processing in the content store.
pub const ASSET_PROCESSING_TEXT: &str = "Asset processing… it will appear here once ready.";

/// Resolve an asset reference to an absolute URL.
///
/// Protocol-relative URLs (`//host/path`) are normalized to `https:`.
/// Returns `None` when there is no reference or no URL yet; the caller must
/// render a placeholder, not a broken image. Pure: never fetches, never
/// checks reachability.
pub fn resolve_asset_url(reference: Option<&AssetReference>) -> Option<String> {
    let url = reference?.url.as_deref()?;
    if let Some(rest) = url.strip_prefix("//") {
        Some(format!("https://{}", rest))
    } else {
        Some(url.to_string())
    }
}

/// Render an embedded asset as a `figure`.
///
/// A resolved asset becomes a zoomable `img`; an unresolved one becomes a
/// processing placeholder. Either way a `figcaption` is emitted whenever the
/// reference carries a title or description. When `ctx` is supplied the edit
/// annotation attaches to the image (or placeholder) element only.
pub(crate) fn render_asset_figure(
    reference: Option<&AssetReference>,
    ctx: Option<&EditContext>,
    annotator: &dyn EditAnnotator,
) -> RenderedNode {
    let caption = reference.and_then(AssetReference::caption);

    let mut figure = RenderedNode::new("figure");
    match resolve_asset_url(reference) {
        Some(url) => {
            let mut img = RenderedNode::new("img")
                .with_class("gallery-img")
                .with_attr("src", url)
                .with_attr("data-zoomable", true);
            if let Some(alt) = caption {
                img = img.with_attr("alt", alt);
            }
            if let Some(ctx) = ctx {
                img = img.with_attrs(annotator.annotate(ctx));
            }
            figure = figure.with_child(img);
        }
        None => {
            let mut placeholder = RenderedNode::new("div")
                .with_class("asset-placeholder")
                .with_text(ASSET_PROCESSING_TEXT);
            if let Some(ctx) = ctx {
                placeholder = placeholder.with_attrs(annotator.annotate(ctx));
            }
            figure = figure.with_child(placeholder);
        }
    }

    if let Some(caption) = caption {
        figure = figure.with_child(
            RenderedNode::new("figcaption")
                .with_class("asset-caption")
                .with_text(caption),
        );
    }

    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::annotate::NoopAnnotator;

    #[test]
    fn test_resolve_protocol_relative() {
        let asset = AssetReference::new().with_url("//images.example/cat.png");
        assert_eq!(
            resolve_asset_url(Some(&asset)),
            Some("https://images.example/cat.png".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_unchanged() {
        let asset = AssetReference::new().with_url("https://images.example/cat.png");
        assert_eq!(
            resolve_asset_url(Some(&asset)),
            Some("https://images.example/cat.png".to_string())
        );
    }

    #[test]
    fn test_resolve_missing() {
        assert_eq!(resolve_asset_url(None), None);
        assert_eq!(resolve_asset_url(Some(&AssetReference::new())), None);
    }

    #[test]
    fn test_figure_with_resolved_asset() {
        let asset = AssetReference::new()
            .with_url("//images.example/cat.png")
            .with_description("A cat");
        let figure = render_asset_figure(Some(&asset), None, &NoopAnnotator);

        assert_eq!(figure.tag, "figure");
        let img = figure.children[0].as_node().unwrap();
        assert_eq!(img.tag, "img");
        assert_eq!(
            img.attr("src").and_then(|v| v.as_str()),
            Some("https://images.example/cat.png")
        );
        let caption = figure.children[1].as_node().unwrap();
        assert_eq!(caption.tag, "figcaption");
        assert_eq!(caption.plain_text(), "A cat");
    }

    #[test]
    fn test_figure_placeholder_keeps_caption() {
        let asset = AssetReference::new().with_title("Diagram");
        let figure = render_asset_figure(Some(&asset), None, &NoopAnnotator);

        let placeholder = figure.children[0].as_node().unwrap();
        assert_eq!(placeholder.tag, "div");
        assert_eq!(placeholder.plain_text(), ASSET_PROCESSING_TEXT);
        let caption = figure.children[1].as_node().unwrap();
        assert_eq!(caption.plain_text(), "Diagram");
    }

    #[test]
    fn test_figure_placeholder_without_caption() {
        let figure = render_asset_figure(Some(&AssetReference::new()), None, &NoopAnnotator);
        assert_eq!(figure.child_count(), 1);
    }
}
