//! Wire-format parsing: content-store JSON into the typed document model.
//!
//! The wire format is a tree of `{ "nodeType": "<tag>", "content": [...],
//! "data": {...} }` objects. Parsing is lenient: a malformed or unrecognized
//! node degrades to an [`Unknown`](crate::model::DocumentNode::Unknown)
//! variant or an absent reference target, never an error. Only a root that
//! is not a `document` object fails.

use crate::error::{Error, Result};
use crate::model::{
    AssetReference, Document, DocumentNode, EntryReference, HeadingLevel, InlineNode, ListItem,
    NodeTag, TableCell, TableRow,
};
use log::debug;
use serde_json::{Map, Value};

/// Parse a document from a JSON string.
pub fn parse_document_str(input: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(input)?;
    parse_document(&value)
}

/// Parse a document from an already-deserialized JSON value.
///
/// The root must be an object with `nodeType == "document"`; anything else
/// is rejected. Per-node malformation inside the tree degrades instead.
pub fn parse_document(value: &Value) -> Result<Document> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::InvalidDocument("root is not an object".to_string()))?;

    let node_type = obj.get("nodeType").and_then(Value::as_str).unwrap_or("");
    if node_type != "document" {
        return Err(Error::InvalidDocument(format!(
            "root nodeType is `{}`, expected `document`",
            node_type
        )));
    }

    Ok(Document::with_content(
        children(obj).iter().map(parse_block).collect(),
    ))
}

fn children(obj: &Map<String, Value>) -> &[Value] {
    obj.get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn data<'a>(obj: &'a Map<String, Value>) -> Option<&'a Value> {
    obj.get("data")
}

fn parse_block(value: &Value) -> DocumentNode {
    let Some(obj) = value.as_object() else {
        debug!("non-object block node, dropping content");
        return DocumentNode::Unknown {
            tag: String::new(),
            content: Vec::new(),
        };
    };

    let wire_tag = obj.get("nodeType").and_then(Value::as_str).unwrap_or("");
    match NodeTag::from_wire(wire_tag) {
        Some(NodeTag::Paragraph) => DocumentNode::Paragraph {
            content: children(obj).iter().map(parse_inline).collect(),
        },
        Some(NodeTag::Heading2) | Some(NodeTag::Heading3) | Some(NodeTag::Heading4) => {
            // Tag matched above, depth digit is the last character.
            let depth: u8 = wire_tag.as_bytes()[wire_tag.len() - 1] - b'0';
            DocumentNode::Heading {
                level: HeadingLevel::from_depth(depth).unwrap_or(HeadingLevel::H2),
                content: children(obj).iter().map(parse_inline).collect(),
            }
        }
        Some(NodeTag::UnorderedList) => DocumentNode::UnorderedList {
            items: children(obj).iter().map(parse_list_item).collect(),
        },
        Some(NodeTag::OrderedList) => DocumentNode::OrderedList {
            items: children(obj).iter().map(parse_list_item).collect(),
        },
        Some(NodeTag::Table) => DocumentNode::Table {
            rows: children(obj).iter().filter_map(parse_table_row).collect(),
        },
        Some(NodeTag::Blockquote) => DocumentNode::Blockquote {
            content: children(obj).iter().map(parse_block).collect(),
        },
        Some(NodeTag::EmbeddedAssetBlock) => DocumentNode::EmbeddedAsset {
            target: data(obj).and_then(parse_asset_target),
        },
        Some(NodeTag::EmbeddedEntryBlock) => DocumentNode::EmbeddedEntry {
            target: data(obj).and_then(parse_entry_target),
        },
        // Structural tags outside block position, or anything unrecognized:
        // keep the tag and the children so the renderer can pass through.
        _ => {
            if !wire_tag.is_empty() {
                debug!("unrecognized block tag `{}`", wire_tag);
            }
            DocumentNode::Unknown {
                tag: wire_tag.to_string(),
                content: children(obj).iter().map(parse_block).collect(),
            }
        }
    }
}

fn parse_inline(value: &Value) -> InlineNode {
    let Some(obj) = value.as_object() else {
        return InlineNode::Unknown {
            tag: String::new(),
            content: Vec::new(),
        };
    };

    let wire_tag = obj.get("nodeType").and_then(Value::as_str).unwrap_or("");
    match NodeTag::from_wire(wire_tag) {
        Some(NodeTag::Text) => InlineNode::Text {
            value: obj
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        },
        Some(NodeTag::Hyperlink) => InlineNode::Hyperlink {
            uri: data(obj)
                .and_then(|d| d.get("uri"))
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            content: children(obj).iter().map(parse_inline).collect(),
        },
        Some(NodeTag::EmbeddedEntryInline) => InlineNode::EmbeddedEntry {
            target: data(obj).and_then(parse_entry_target),
        },
        _ => {
            if !wire_tag.is_empty() {
                debug!("unrecognized inline tag `{}`", wire_tag);
            }
            InlineNode::Unknown {
                tag: wire_tag.to_string(),
                content: children(obj).iter().map(parse_inline).collect(),
            }
        }
    }
}

fn parse_list_item(value: &Value) -> ListItem {
    if let Some(obj) = value.as_object() {
        if obj.get("nodeType").and_then(Value::as_str) == Some("list-item") {
            return ListItem::new(children(obj).iter().map(parse_block).collect());
        }
    }
    // A stray non-item child inside a list: keep it as a single-block item.
    ListItem::new(vec![parse_block(value)])
}

fn parse_table_row(value: &Value) -> Option<TableRow> {
    let obj = value.as_object()?;
    if obj.get("nodeType").and_then(Value::as_str) != Some("table-row") {
        debug!("non-row node inside table, dropping");
        return None;
    }
    Some(TableRow::new(
        children(obj).iter().filter_map(parse_table_cell).collect(),
    ))
}

fn parse_table_cell(value: &Value) -> Option<TableCell> {
    let obj = value.as_object()?;
    let is_header = match obj.get("nodeType").and_then(Value::as_str) {
        Some("table-header-cell") => true,
        Some("table-cell") => false,
        _ => {
            debug!("non-cell node inside table row, dropping");
            return None;
        }
    };
    Some(TableCell {
        is_header,
        content: children(obj).iter().map(parse_block).collect(),
    })
}

/// Parse an asset target (`data.target` of an `embedded-asset-block`).
///
/// The expected shape is `{ sys: {...}, fields: { file: { url }, title,
/// description } }`. A missing `file.url` yields a reference with `url ==
/// None`: the asset is still processing, which is not an error.
fn parse_asset_target(data: &Value) -> Option<AssetReference> {
    asset_from_link(data.get("target")?)
}

/// Parse an asset link value (`{ sys, fields }`), as found both in asset
/// targets and inside entry field bags such as a gallery's `images` list.
pub(crate) fn asset_from_link(link: &Value) -> Option<AssetReference> {
    let fields = link.get("fields")?.as_object()?;

    let url = fields
        .get("file")
        .and_then(|f| f.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(AssetReference {
        url,
        title: fields
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string),
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// Entry id of an asset or entry link value (`sys.id`).
pub(crate) fn link_id(link: &Value) -> Option<&str> {
    link.get("sys")?.get("id")?.as_str()
}

/// Parse an entry target (`data.target` of an embedded-entry node).
///
/// The content-type discriminator lives at `sys.contentType.sys.id`; the
/// field bag is kept verbatim for the entry registry to interpret.
fn parse_entry_target(data: &Value) -> Option<EntryReference> {
    let target = data.get("target")?;
    let id = link_id(target)?;

    let content_type = target
        .get("sys")?
        .get("contentType")?
        .get("sys")?
        .get("id")?
        .as_str()?;

    let fields = target
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    Some(EntryReference {
        id: id.to_string(),
        content_type: content_type.to_string(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(content: Value) -> Value {
        json!({ "nodeType": "document", "content": content })
    }

    #[test]
    fn test_rejects_non_document_root() {
        assert!(parse_document(&json!([])).is_err());
        assert!(parse_document(&json!({ "nodeType": "paragraph" })).is_err());
    }

    #[test]
    fn test_parse_paragraph() {
        let value = doc(json!([{
            "nodeType": "paragraph",
            "content": [{ "nodeType": "text", "value": "Hello" }]
        }]));
        let parsed = parse_document(&value).unwrap();
        assert_eq!(
            parsed.content,
            vec![DocumentNode::text_paragraph("Hello")]
        );
    }

    #[test]
    fn test_parse_all_heading_levels() {
        let value = doc(json!([
            { "nodeType": "heading-2", "content": [{ "nodeType": "text", "value": "a" }] },
            { "nodeType": "heading-3", "content": [{ "nodeType": "text", "value": "b" }] },
            { "nodeType": "heading-4", "content": [{ "nodeType": "text", "value": "c" }] },
        ]));
        let parsed = parse_document(&value).unwrap();
        let levels: Vec<_> = parsed
            .content
            .iter()
            .map(|n| match n {
                DocumentNode::Heading { level, .. } => level.depth(),
                _ => 0,
            })
            .collect();
        assert_eq!(levels, vec![2, 3, 4]);
    }

    #[test]
    fn test_parse_nested_list() {
        let value = doc(json!([{
            "nodeType": "unordered-list",
            "content": [{
                "nodeType": "list-item",
                "content": [
                    { "nodeType": "paragraph",
                      "content": [{ "nodeType": "text", "value": "outer" }] },
                    { "nodeType": "ordered-list",
                      "content": [{
                          "nodeType": "list-item",
                          "content": [{ "nodeType": "paragraph",
                                        "content": [{ "nodeType": "text", "value": "inner" }] }]
                      }] }
                ]
            }]
        }]));
        let parsed = parse_document(&value).unwrap();
        let DocumentNode::UnorderedList { items } = &parsed.content[0] else {
            panic!("expected unordered list");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content.len(), 2);
        assert!(matches!(
            items[0].content[1],
            DocumentNode::OrderedList { .. }
        ));
    }

    #[test]
    fn test_parse_table() {
        let value = doc(json!([{
            "nodeType": "table",
            "content": [{
                "nodeType": "table-row",
                "content": [
                    { "nodeType": "table-header-cell",
                      "content": [{ "nodeType": "paragraph",
                                    "content": [{ "nodeType": "text", "value": "Metric" }] }] },
                    { "nodeType": "table-cell",
                      "content": [{ "nodeType": "paragraph",
                                    "content": [{ "nodeType": "text", "value": "42" }] }] }
                ]
            }]
        }]));
        let parsed = parse_document(&value).unwrap();
        let DocumentNode::Table { rows } = &parsed.content[0] else {
            panic!("expected table");
        };
        assert_eq!(rows[0].cells.len(), 2);
        assert!(rows[0].cells[0].is_header);
        assert!(!rows[0].cells[1].is_header);
    }

    #[test]
    fn test_parse_hyperlink() {
        let value = doc(json!([{
            "nodeType": "paragraph",
            "content": [{
                "nodeType": "hyperlink",
                "data": { "uri": "https://example.com" },
                "content": [{ "nodeType": "text", "value": "link" }]
            }]
        }]));
        let parsed = parse_document(&value).unwrap();
        assert_eq!(
            parsed.content[0],
            DocumentNode::Paragraph {
                content: vec![InlineNode::link("https://example.com", "link")]
            }
        );
    }

    #[test]
    fn test_parse_asset_without_url() {
        let value = doc(json!([{
            "nodeType": "embedded-asset-block",
            "data": { "target": {
                "sys": { "id": "asset1" },
                "fields": { "title": "Pending" }
            } }
        }]));
        let parsed = parse_document(&value).unwrap();
        let DocumentNode::EmbeddedAsset { target } = &parsed.content[0] else {
            panic!("expected embedded asset");
        };
        let asset = target.as_ref().unwrap();
        assert_eq!(asset.url, None);
        assert_eq!(asset.title.as_deref(), Some("Pending"));
    }

    #[test]
    fn test_parse_entry_target() {
        let value = doc(json!([{
            "nodeType": "embedded-entry-block",
            "data": { "target": {
                "sys": {
                    "id": "gal1",
                    "contentType": { "sys": { "id": "imageGallery" } }
                },
                "fields": { "showCaptions": true }
            } }
        }]));
        let parsed = parse_document(&value).unwrap();
        let DocumentNode::EmbeddedEntry { target } = &parsed.content[0] else {
            panic!("expected embedded entry");
        };
        let entry = target.as_ref().unwrap();
        assert_eq!(entry.id, "gal1");
        assert_eq!(entry.content_type, "imageGallery");
        assert!(entry.bool_field("showCaptions"));
    }

    #[test]
    fn test_missing_entry_target_degrades() {
        let value = doc(json!([{ "nodeType": "embedded-entry-block", "data": {} }]));
        let parsed = parse_document(&value).unwrap();
        assert_eq!(
            parsed.content[0],
            DocumentNode::EmbeddedEntry { target: None }
        );
    }

    #[test]
    fn test_unrecognized_tag_becomes_unknown() {
        let value = doc(json!([{
            "nodeType": "horizontal-rule",
            "content": []
        }]));
        let parsed = parse_document(&value).unwrap();
        assert_eq!(
            parsed.content[0],
            DocumentNode::Unknown {
                tag: "horizontal-rule".to_string(),
                content: Vec::new()
            }
        );
    }
}
