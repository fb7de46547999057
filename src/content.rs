//! Content items (posts and pages)
//!
//! The item shape returned by list and detail endpoints. Relations embedded
//! under `_embedded` are normalized once, when the item is deserialized.

use crate::embedded::{EmbeddedRelations, RelationResolver};
use serde::{Deserialize, Serialize};

/// A rich-text field as served by the API (`{"rendered": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Rendered HTML
    #[serde(default)]
    pub rendered: String,
    /// Whether the field is password protected
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub protected: bool,
}

impl Rendered {
    /// Create a rendered field
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            protected: false,
        }
    }
}

/// Rich-text fields that can be resolved on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
    Excerpt,
}

/// A post or page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,

    /// Publish timestamp (ISO-8601, site-local)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Post type as reported by the API (`post`, `page`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Rendered>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Rendered>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Rendered>,

    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedRelations>,
}

impl ContentItem {
    /// Create an empty item with the given id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Borrow a resolver over this item's fields and relations
    pub fn relations(&self) -> RelationResolver<'_> {
        RelationResolver::new(self)
    }

    /// Get a rich-text field
    pub fn rendered(&self, field: Field) -> Option<&Rendered> {
        match field {
            Field::Title => self.title.as_ref(),
            Field::Content => self.content.as_ref(),
            Field::Excerpt => self.excerpt.as_ref(),
        }
    }
}
