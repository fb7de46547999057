//! Relation resolver
//!
//! Stateless lookups over a single [`ContentItem`]. Every operation is total:
//! missing relations, fields or sizes resolve to `None` or an empty list.

use super::types::{Author, FeaturedMedia, Term, TAXONOMY_CATEGORY, TAXONOMY_TAG};
use crate::content::{ContentItem, Field};
use crate::context::ContextConfig;
use serde::Serialize;

/// Media size used when none is requested
pub const DEFAULT_MEDIA_SIZE: &str = "full";

/// A featured media entry resolved at one size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia<'a> {
    pub url: &'a str,
    pub alt_text: &'a str,
    pub media_type: &'a str,
}

/// Borrowed resolver over a content item
#[derive(Debug, Clone, Copy)]
pub struct RelationResolver<'a> {
    item: &'a ContentItem,
}

impl<'a> RelationResolver<'a> {
    /// Create a resolver for an item
    pub fn new(item: &'a ContentItem) -> Self {
        Self { item }
    }

    /// The item being resolved
    pub fn item(&self) -> &'a ContentItem {
        self.item
    }

    /// Whether the item carries an `_embedded` bag at all
    pub fn has_relations(&self) -> bool {
        self.item.embedded.is_some()
    }

    /// Authors in source order; empty if none were embedded
    pub fn authors(&self) -> &'a [Author] {
        self.item
            .embedded
            .as_ref()
            .map(|embedded| embedded.authors.as_slice())
            .unwrap_or_default()
    }

    /// Every embedded term regardless of taxonomy, in source order
    pub fn all_terms(&self) -> &'a [Term] {
        self.item
            .embedded
            .as_ref()
            .map(|embedded| embedded.terms.as_slice())
            .unwrap_or_default()
    }

    /// Terms of one taxonomy, in source order
    pub fn terms(&self, taxonomy: &str) -> Vec<&'a Term> {
        self.all_terms()
            .iter()
            .filter(|term| term.taxonomy == taxonomy)
            .collect()
    }

    /// Terms in the `category` taxonomy
    pub fn categories(&self) -> Vec<&'a Term> {
        self.terms(TAXONOMY_CATEGORY)
    }

    /// Terms in the `post_tag` taxonomy
    pub fn tags(&self) -> Vec<&'a Term> {
        self.terms(TAXONOMY_TAG)
    }

    /// First featured media entry at the requested size
    ///
    /// Returns `None` when the size is missing; other sizes are never
    /// substituted.
    pub fn media(&self, size: &str) -> Option<ResolvedMedia<'a>> {
        let media: &'a FeaturedMedia = self.item.embedded.as_ref()?.media.first()?;
        let url = media.sizes.get(size)?;
        Some(ResolvedMedia {
            url,
            alt_text: &media.alt_text,
            media_type: &media.media_type,
        })
    }

    /// First featured media entry at full size
    pub fn featured_media(&self) -> Option<ResolvedMedia<'a>> {
        self.media(DEFAULT_MEDIA_SIZE)
    }

    /// Rendered text of a field, `None` if the field is missing
    ///
    /// A present but empty field resolves to `Some("")`.
    pub fn field(&self, field: Field) -> Option<&'a str> {
        self.item
            .rendered(field)
            .map(|rendered| rendered.rendered.as_str())
    }

    /// Raw publish timestamp
    pub fn date(&self) -> Option<&'a str> {
        self.item.date.as_deref()
    }

    /// Publish timestamp formatted for display
    ///
    /// Uses `local` if given, else the context's formatter, else the raw
    /// timestamp.
    pub fn formatted_date(
        &self,
        context: &ContextConfig,
        local: Option<&dyn Fn(&str) -> String>,
    ) -> Option<String> {
        let raw = self.date()?;
        if let Some(format) = local {
            return Some(format(raw));
        }
        Some(context.format_date(raw).unwrap_or_else(|| raw.to_string()))
    }
}
