//! Reference types for embedded content (assets and entries).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reference to a media asset embedded in the document.
///
/// `url == None` means the asset exists but has not finished processing in
/// the content store. That is an expected state, not an error: the renderer
/// substitutes a placeholder and keeps any caption text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetReference {
    /// Asset URL, possibly protocol-relative (`//host/path`)
    pub url: Option<String>,

    /// Asset title
    pub title: Option<String>,

    /// Asset description
    pub description: Option<String>,
}

impl AssetReference {
    /// Create an empty reference (asset still processing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Caption text for this asset: the description when present, otherwise
    /// the title.
    pub fn caption(&self) -> Option<&str> {
        self.description.as_deref().or(self.title.as_deref())
    }

    /// Check whether the asset has a usable URL.
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }
}

/// A reference to another content entry embedded in the document.
///
/// The `fields` bag is opaque to the renderer; only the resolver registered
/// for `content_type` interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryReference {
    /// Entry id in the content store
    pub id: String,

    /// Content-type discriminator (e.g. "imageGallery")
    pub content_type: String,

    /// Entry fields, keyed by field id
    pub fields: Map<String, Value>,
}

impl EntryReference {
    /// Create a reference with an empty field bag.
    pub fn new(id: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            fields: Map::new(),
        }
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a raw field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a string field.
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Get a boolean field, defaulting to `false` when absent or mistyped.
    pub fn bool_field(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Get an array field.
    pub fn array_field(&self, name: &str) -> Option<&Vec<Value>> {
        self.fields.get(name).and_then(Value::as_array)
    }
}
