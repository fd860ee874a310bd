//! Heading anchors: slugs derived from the input tree before rendering.
//!
//! Navigation chrome wants one anchor per heading. Deriving those from the
//! rendered output would couple navigation to presentation, so the anchors
//! come from a pure pass over the *input* document instead.

use crate::model::{Document, DocumentNode, HeadingLevel, TableCell};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// A navigation anchor for one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAnchor {
    /// Unique slug usable as an element id
    pub slug: String,

    /// Heading text
    pub title: String,

    /// Heading level
    pub level: HeadingLevel,
}

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

/// Normalize heading text to a URL-safe slug.
///
/// Accents fold away via NFKD, everything is lowercased, and runs of
/// non-alphanumeric characters collapse to a single `-`. Pure and
/// deterministic; uniqueness across a document is handled by
/// [`heading_anchors`].
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| c.is_ascii())
        .collect::<String>()
        .to_lowercase();

    separator_runs()
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

/// Collect anchors for every heading in the document, in tree order.
///
/// When two headings normalize to the same slug the first occurrence keeps
/// it; later duplicates get `-2`, `-3`, … suffixes.
pub fn heading_anchors(doc: &Document) -> Vec<HeadingAnchor> {
    let mut anchors = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    collect(&doc.content, &mut anchors, &mut seen);
    anchors
}

fn collect(
    nodes: &[DocumentNode],
    anchors: &mut Vec<HeadingAnchor>,
    seen: &mut HashMap<String, usize>,
) {
    for node in nodes {
        match node {
            DocumentNode::Heading { level, .. } => {
                let title = node.plain_text();
                let base = slugify(&title);
                let count = seen.entry(base.clone()).or_insert(0);
                *count += 1;
                let slug = if *count == 1 {
                    base
                } else {
                    format!("{}-{}", base, count)
                };
                anchors.push(HeadingAnchor {
                    slug,
                    title: title.trim().to_string(),
                    level: *level,
                });
            }
            DocumentNode::Blockquote { content } | DocumentNode::Unknown { content, .. } => {
                collect(content, anchors, seen);
            }
            DocumentNode::UnorderedList { items } | DocumentNode::OrderedList { items } => {
                for item in items {
                    collect(&item.content, anchors, seen);
                }
            }
            DocumentNode::Table { rows } => {
                for row in rows {
                    for TableCell { content, .. } in &row.cells {
                        collect(content, anchors, seen);
                    }
                }
            }
            DocumentNode::Paragraph { .. }
            | DocumentNode::EmbeddedAsset { .. }
            | DocumentNode::EmbeddedEntry { .. } => {}
        }
    }
}
