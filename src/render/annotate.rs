//! Edit-context annotation for external editing overlays.
//!
//! A live-edit overlay needs to map rendered elements back to the content
//! field they came from. The renderer attaches that mapping as an attribute
//! bag produced by an [`EditAnnotator`], injected at construction so tests
//! and overlay-free deployments can substitute a no-op.

use serde_json::{Map, Value};

/// Identifies which content field a rendered element corresponds to.
///
/// Read-only: the context is fixed for one whole document instance and
/// flows unchanged to children. Resolvers that emit content owned by other
/// entries (e.g. gallery images) derive fresh contexts instead of mutating
/// this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContext {
    /// Entry id in the content store
    pub entry_id: String,

    /// Field id within the entry
    pub field_id: String,
}

impl EditContext {
    /// Create a context for one entry field.
    pub fn new(entry_id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            field_id: field_id.into(),
        }
    }

    /// Derive a context for a different field of the same entry.
    pub fn with_field(&self, field_id: impl Into<String>) -> Self {
        Self {
            entry_id: self.entry_id.clone(),
            field_id: field_id.into(),
        }
    }
}

/// Produces the attribute bag attached to the element representing one
/// field's value.
///
/// The bag attaches to exactly one emitted node per (entry id, field id)
/// occurrence: the top-level element for that field (the `h2` for a heading,
/// the outer `ul` for a list, the single `img` for an asset). It is never
/// replicated onto descendants.
pub trait EditAnnotator: Send + Sync {
    /// Build the attribute bag for one context occurrence.
    fn annotate(&self, ctx: &EditContext) -> Map<String, Value>;
}

/// Default annotator emitting `data-edit-entry-id` / `data-edit-field-id`
/// attributes for an inspector-style overlay.
#[derive(Debug, Clone, Default)]
pub struct OverlayAnnotator;

impl OverlayAnnotator {
    /// Create a new overlay annotator.
    pub fn new() -> Self {
        Self
    }
}

impl EditAnnotator for OverlayAnnotator {
    fn annotate(&self, ctx: &EditContext) -> Map<String, Value> {
        let mut attrs = Map::new();
        attrs.insert(
            "data-edit-entry-id".to_string(),
            Value::from(ctx.entry_id.clone()),
        );
        attrs.insert(
            "data-edit-field-id".to_string(),
            Value::from(ctx.field_id.clone()),
        );
        attrs
    }
}

/// Annotator that attaches nothing. Useful in tests and when no editing
/// overlay is active.
#[derive(Debug, Clone, Default)]
pub struct NoopAnnotator;

impl NoopAnnotator {
    /// Create a new no-op annotator.
    pub fn new() -> Self {
        Self
    }
}

impl EditAnnotator for NoopAnnotator {
    fn annotate(&self, _ctx: &EditContext) -> Map<String, Value> {
        Map::new()
    }
}
