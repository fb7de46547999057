//! Query parameter and result types

use crate::content::ContentItem;
use crate::pagination::PaginationState;
use reqwest::header::HeaderMap;

/// Query parameter asking the API to embed relations
pub const EMBED_PARAM: &str = "_embed";

/// Parameters for a list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Page to request (1-based)
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Full-text search
    pub search: Option<String>,
    /// Ask for embedded relations
    pub embed: bool,
    /// Additional raw parameters, sent in order
    pub extra: Vec<(String, String)>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            search: None,
            embed: true,
            extra: Vec::new(),
        }
    }
}

impl QueryParams {
    /// Create default parameters (embedding on)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set items per page
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the search term
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Turn relation embedding on or off
    #[must_use]
    pub fn embed(mut self, embed: bool) -> Self {
        self.embed = embed;
        self
    }

    /// Add a raw parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Query-string pairs in a stable order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if self.embed {
            pairs.push((EMBED_PARAM.to_string(), "true".to_string()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }
}

/// One page of a list query
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Items in response order
    pub items: Vec<ContentItem>,
    /// Response headers, if the transport returned an envelope
    pub headers: Option<HeaderMap>,
    /// Pagination derived from the requested page and headers
    pub pagination: PaginationState,
}
