//! Pagination types

use serde::{Deserialize, Serialize};

/// Header carrying the total number of items
pub const TOTAL_HEADER: &str = "x-wp-total";

/// Header carrying the total number of pages
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Derived pagination view-state for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Page that was requested, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total number of pages (at least 1)
    pub pages: u64,
    /// Total number of items (at least 1)
    pub total: u64,
    /// A later page exists
    pub has_next: bool,
    /// An earlier page exists
    pub has_prev: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: None,
            pages: 1,
            total: 1,
            has_next: false,
            has_prev: false,
        }
    }
}

impl PaginationState {
    /// Next page number, if there is one
    ///
    /// `None` past `u32::MAX` even when the header reports more pages.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.page.and_then(|page| page.checked_add(1))
        } else {
            None
        }
    }

    /// Previous page number, if there is one
    pub fn prev_page(&self) -> Option<u32> {
        if self.has_prev {
            self.page.map(|page| page - 1)
        } else {
            None
        }
    }
}
