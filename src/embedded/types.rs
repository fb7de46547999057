//! Embedded relation types
//!
//! Normalized relation records plus the conversions to and from the
//! `_embedded` wire form. Reading is lenient; writing emits the wire form
//! so serialized items read back unchanged.

use crate::context::{ClickEvent, ClickKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Taxonomy name for categories
pub const TAXONOMY_CATEGORY: &str = "category";

/// Taxonomy name for tags
pub const TAXONOMY_TAG: &str = "post_tag";

// ============================================================================
// Relation Records
// ============================================================================

/// An embedded author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub link: String,
}

impl Author {
    /// Click event for this author
    pub fn click_event(&self) -> ClickEvent {
        ClickEvent::new(ClickKind::Author, self.id, &self.name, &self.link)
    }
}

/// An embedded taxonomy term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub taxonomy: String,
}

impl Term {
    /// Check if this term is a category
    pub fn is_category(&self) -> bool {
        self.taxonomy == TAXONOMY_CATEGORY
    }

    /// Check if this term is a tag
    pub fn is_tag(&self) -> bool {
        self.taxonomy == TAXONOMY_TAG
    }

    /// Click event for this term
    ///
    /// Only categories and tags produce events.
    pub fn click_event(&self) -> Option<ClickEvent> {
        let kind = if self.is_category() {
            ClickKind::Category
        } else if self.is_tag() {
            ClickKind::Tag
        } else {
            return None;
        };
        Some(ClickEvent::new(kind, self.id, &self.name, &self.link))
    }
}

/// An embedded featured media entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMedia", into = "WireMedia")]
pub struct FeaturedMedia {
    pub media_type: String,
    pub alt_text: String,
    /// Size name to source URL
    pub sizes: BTreeMap<String, String>,
}

/// Relations attached to a content item
///
/// Built once from the wire form; lookups never re-partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEmbedded", into = "WireEmbedded")]
pub struct EmbeddedRelations {
    /// Authors in source order
    pub authors: Vec<Author>,
    /// All term groups flattened, source order, each tagged with its taxonomy
    pub terms: Vec<Term>,
    /// Featured media entries in source order
    pub media: Vec<FeaturedMedia>,
}

// ============================================================================
// Wire Form
// ============================================================================

#[derive(Deserialize)]
struct RawEmbedded {
    #[serde(default)]
    author: Option<Value>,
    #[serde(rename = "wp:term", default)]
    terms: Option<Value>,
    #[serde(rename = "wp:featuredmedia", default)]
    featured_media: Option<Value>,
}

impl From<RawEmbedded> for EmbeddedRelations {
    fn from(raw: RawEmbedded) -> Self {
        let terms = match raw.terms {
            Some(Value::Array(groups)) => groups
                .into_iter()
                .flat_map(|group| lenient_list::<Term>(Some(group), "wp:term"))
                .collect(),
            Some(other) => {
                trace!(kind = json_kind(&other), "Ignoring non-list wp:term");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self {
            authors: lenient_list(raw.author, "author"),
            terms,
            media: lenient_list(raw.featured_media, "wp:featuredmedia"),
        }
    }
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    alt_text: Option<String>,
    #[serde(default)]
    media_details: Option<Value>,
}

impl From<RawMedia> for FeaturedMedia {
    fn from(raw: RawMedia) -> Self {
        // media_details is `[]` for attachments without generated sizes
        let sizes = raw
            .media_details
            .as_ref()
            .and_then(|details| details.get("sizes"))
            .and_then(Value::as_object)
            .map(|sizes| {
                sizes
                    .iter()
                    .filter_map(|(name, size)| {
                        let url = size.get("source_url")?.as_str()?;
                        Some((name.clone(), url.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            media_type: raw.media_type.unwrap_or_default(),
            alt_text: raw.alt_text.unwrap_or_default(),
            sizes,
        }
    }
}

/// Serialized `_embedded` bag
#[derive(Serialize)]
struct WireEmbedded {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    author: Vec<Author>,
    #[serde(rename = "wp:term", skip_serializing_if = "Vec::is_empty")]
    terms: Vec<Vec<Term>>,
    #[serde(rename = "wp:featuredmedia", skip_serializing_if = "Vec::is_empty")]
    featured_media: Vec<FeaturedMedia>,
}

impl From<EmbeddedRelations> for WireEmbedded {
    fn from(relations: EmbeddedRelations) -> Self {
        // Consecutive runs of one taxonomy become one group, so flattening
        // the groups again restores the exact term order.
        let terms = relations
            .terms
            .chunk_by(|a, b| a.taxonomy == b.taxonomy)
            .map(<[Term]>::to_vec)
            .collect();

        Self {
            author: relations.authors,
            terms,
            featured_media: relations.media,
        }
    }
}

#[derive(Serialize)]
struct WireMedia {
    media_type: String,
    alt_text: String,
    media_details: WireMediaDetails,
}

#[derive(Serialize)]
struct WireMediaDetails {
    sizes: BTreeMap<String, WireMediaSize>,
}

#[derive(Serialize)]
struct WireMediaSize {
    source_url: String,
}

impl From<FeaturedMedia> for WireMedia {
    fn from(media: FeaturedMedia) -> Self {
        let sizes = media
            .sizes
            .into_iter()
            .map(|(name, source_url)| (name, WireMediaSize { source_url }))
            .collect();

        Self {
            media_type: media.media_type,
            alt_text: media.alt_text,
            media_details: WireMediaDetails { sizes },
        }
    }
}

/// Deserialize each list entry on its own, skipping the ones that do not fit
fn lenient_list<T: DeserializeOwned>(value: Option<Value>, label: &str) -> Vec<T> {
    match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    trace!(relation = label, error = %e, "Skipping malformed embedded entry");
                    None
                }
            })
            .collect(),
        Some(other) => {
            trace!(relation = label, kind = json_kind(&other), "Ignoring non-list relation");
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
