//! Printable summaries of resolved items

use crate::content::{ContentItem, Field};
use crate::context::ContextConfig;
use crate::pagination::PaginationState;
use serde::Serialize;

/// One item with its relations resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl ItemSummary {
    /// Resolve an item against the context
    pub fn from_item(item: &ContentItem, context: &ContextConfig, size: &str) -> Self {
        let relations = item.relations();
        Self {
            id: item.id,
            title: relations.field(Field::Title).map(str::to_string),
            date: relations.formatted_date(context, None),
            authors: relations
                .authors()
                .iter()
                .map(|author| author.name.clone())
                .collect(),
            categories: relations
                .categories()
                .iter()
                .map(|term| term.name.clone())
                .collect(),
            tags: relations.tags().iter().map(|term| term.name.clone()).collect(),
            media_url: relations.media(size).map(|media| media.url.to_string()),
        }
    }

    /// Human-readable block
    pub fn render_pretty(&self) -> String {
        let mut lines = vec![format!(
            "#{} {}",
            self.id,
            self.title.as_deref().unwrap_or("(untitled)")
        )];
        if let Some(date) = &self.date {
            lines.push(format!("  date:       {date}"));
        }
        if !self.authors.is_empty() {
            lines.push(format!("  authors:    {}", self.authors.join(", ")));
        }
        if !self.categories.is_empty() {
            lines.push(format!("  categories: {}", self.categories.join(", ")));
        }
        if !self.tags.is_empty() {
            lines.push(format!("  tags:       {}", self.tags.join(", ")));
        }
        if let Some(url) = &self.media_url {
            lines.push(format!("  media:      {url}"));
        }

        lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// A list page with its pagination state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub items: Vec<ItemSummary>,
    pub pagination: PaginationState,
}

impl ListSummary {
    /// Human-readable listing followed by a pagination footer
    pub fn render_pretty(&self) -> String {
        let p = &self.pagination;
        let page = p.page.map_or_else(|| "-".to_string(), |page| page.to_string());
        let footer = format!(
            "page {page} of {} ({} items){}{}\n",
            p.pages,
            p.total,
            if p.has_prev { " [prev]" } else { "" },
            if p.has_next { " [next]" } else { "" },
        );

        self.items
            .iter()
            .map(ItemSummary::render_pretty)
            .chain(std::iter::once(footer))
            .collect()
    }
}
