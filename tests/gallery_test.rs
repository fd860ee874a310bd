//! Integration tests for embedded-entry resolution.

use richtree::{
    parse_document, EditContext, EntryReference, EntryResolver, NoopAnnotator, Renderer,
    RenderedChild, RenderedNode, UNKNOWN_ENTRY_TEXT,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn doc(content: Value) -> Value {
    json!({ "nodeType": "document", "content": content })
}

fn gallery_block(images: Value, show_captions: bool) -> Value {
    json!({
        "nodeType": "embedded-entry-block",
        "data": { "target": {
            "sys": {
                "id": "gal1",
                "contentType": { "sys": { "id": "imageGallery" } }
            },
            "fields": { "images": images, "showCaptions": show_captions }
        } }
    })
}

fn image_link(id: &str, url: &str, title: &str) -> Value {
    json!({
        "sys": { "id": id },
        "fields": { "title": title, "file": { "url": url } }
    })
}

fn render(value: &Value) -> Vec<RenderedChild> {
    let parsed = parse_document(value).expect("document parses");
    Renderer::new().render_document(&parsed, &EditContext::new("case1", "overview"))
}

#[test]
fn gallery_with_three_images_and_captions() {
    let images = json!([
        image_link("a1", "//img.example/1.png", "First"),
        image_link("a2", "//img.example/2.png", "Second"),
        image_link("a3", "//img.example/3.png", "Third"),
    ]);
    let out = render(&doc(json!([gallery_block(images, true)])));

    let section = out[0].as_node().unwrap();
    assert_eq!(section.tag, "section");
    // Gallery annotation derives from the gallery's own entry id.
    assert_eq!(
        section.attr("data-edit-entry-id").and_then(|v| v.as_str()),
        Some("gal1")
    );

    let grid = section.children[0].as_node().unwrap();
    assert_eq!(grid.child_count(), 3);

    for item in &grid.children {
        let figure = item.as_node().unwrap().children[0].as_node().unwrap();
        let img = figure.children[0].as_node().unwrap();
        assert_eq!(img.tag, "img");
        assert!(img
            .attr("src")
            .and_then(|v| v.as_str())
            .unwrap()
            .starts_with("https://"));

        let caption = figure.children[1].as_node().unwrap();
        assert_eq!(caption.tag, "figcaption");
        assert!(!caption.plain_text().is_empty());
    }
}

#[test]
fn gallery_items_carry_their_own_context() {
    let images = json!([image_link("a1", "//img.example/1.png", "First")]);
    let out = render(&doc(json!([gallery_block(images, false)])));

    let section = out[0].as_node().unwrap();
    let grid = section.children[0].as_node().unwrap();
    let item = grid.children[0].as_node().unwrap();

    assert_eq!(
        item.attr("data-edit-entry-id").and_then(|v| v.as_str()),
        Some("a1")
    );
    assert_eq!(
        item.attr("data-edit-field-id").and_then(|v| v.as_str()),
        Some("file")
    );
}

#[test]
fn unknown_content_type_renders_diagnostic_placeholder() {
    let out = render(&doc(json!([{
        "nodeType": "embedded-entry-block",
        "data": { "target": {
            "sys": { "id": "q1", "contentType": { "sys": { "id": "quiz" } } },
            "fields": {}
        } }
    }])));

    assert_eq!(out.len(), 1);
    let fallback = out[0].as_node().unwrap();
    assert_eq!(fallback.plain_text(), UNKNOWN_ENTRY_TEXT);
}

#[test]
fn missing_entry_target_renders_nothing() {
    let out = render(&doc(json!([
        { "nodeType": "embedded-entry-block", "data": {} },
        { "nodeType": "paragraph",
          "content": [{ "nodeType": "text", "value": "after" }] }
    ])));

    // The broken reference vanishes; the rest of the page still renders.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].as_node().unwrap().plain_text(), "after");
}

#[test]
fn inline_gallery_renders_thumbnail_strip() {
    let out = render(&doc(json!([{
        "nodeType": "paragraph",
        "content": [
            { "nodeType": "text", "value": "see " },
            { "nodeType": "embedded-entry-inline",
              "data": { "target": {
                  "sys": { "id": "gal2",
                           "contentType": { "sys": { "id": "imageGallery" } } },
                  "fields": {
                      "title": "Sketches",
                      "media": [
                          { "fields": { "file": { "url": "//img.example/t1.png" } } },
                          { "fields": { "file": { "url": "//img.example/t2.png" } } }
                      ]
                  }
              } } }
        ]
    }])));

    let p = out[0].as_node().unwrap();
    assert_eq!(p.children[0].as_text(), Some("see "));

    let strip = p.children[1].as_node().unwrap();
    assert_eq!(strip.tag, "span");
    // Title plus two thumbnails, none annotated.
    assert_eq!(strip.child_count(), 3);
    for child in &strip.children {
        assert!(child
            .as_node()
            .unwrap()
            .attr("data-edit-entry-id")
            .is_none());
    }
}

/// Resolver used to verify registry extension through the builder.
struct PullQuoteResolver;

impl EntryResolver for PullQuoteResolver {
    fn content_type(&self) -> &str {
        "pullQuote"
    }

    fn resolve_block(
        &self,
        entry: &EntryReference,
        _ctx: &EditContext,
        _annotator: &dyn richtree::EditAnnotator,
    ) -> RenderedNode {
        RenderedNode::new("aside")
            .with_class("pull-quote")
            .with_text(entry.string_field("quote").unwrap_or_default())
    }
}

#[test]
fn custom_resolver_registers_through_builder() {
    let renderer = Renderer::builder()
        .with_annotator(Arc::new(NoopAnnotator::new()))
        .with_entry_resolver(Arc::new(PullQuoteResolver))
        .build();

    let parsed = parse_document(&doc(json!([{
        "nodeType": "embedded-entry-block",
        "data": { "target": {
            "sys": { "id": "pq1", "contentType": { "sys": { "id": "pullQuote" } } },
            "fields": { "quote": "Ship it" }
        } }
    }])))
    .unwrap();

    let out = renderer.render_document(&parsed, &EditContext::new("e", "f"));
    let aside = out[0].as_node().unwrap();
    assert_eq!(aside.tag, "aside");
    assert_eq!(aside.plain_text(), "Ship it");
}
