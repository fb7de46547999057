//! Per-list pagination tracking

use super::extractor::compute;
use super::types::PaginationState;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Pagination holder for a single list view
///
/// Headers are replaced, never merged: the latest `set_headers` call wins
/// and the state is recomputed from that full header set.
#[derive(Debug, Clone, Default)]
pub struct PaginationTracker {
    requested_page: Option<u32>,
    headers: Option<HeaderMap>,
    state: PaginationState,
}

impl PaginationTracker {
    /// Create a tracker for a requested page with no headers yet
    pub fn new(requested_page: Option<u32>) -> Self {
        Self {
            requested_page,
            headers: None,
            state: compute(requested_page, None),
        }
    }

    /// The requested page
    pub fn requested_page(&self) -> Option<u32> {
        self.requested_page
    }

    /// Headers from the latest update, if any
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// Current pagination state
    pub fn pagination(&self) -> PaginationState {
        self.state
    }

    /// Replace the headers and recompute
    pub fn set_headers(&mut self, headers: HeaderMap) -> PaginationState {
        self.headers = Some(headers);
        self.recompute()
    }

    /// Drop the headers and recompute
    pub fn clear_headers(&mut self) -> PaginationState {
        self.headers = None;
        self.recompute()
    }

    fn recompute(&mut self) -> PaginationState {
        self.state = compute(self.requested_page, self.headers.as_ref());
        self.state
    }
}

/// Build a header map from name/value pairs, skipping invalid entries
pub fn headers_from_pairs<I, K, V>(pairs: I) -> HeaderMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .filter_map(|(name, value)| {
            let name = HeaderName::from_bytes(name.as_ref().as_bytes()).ok()?;
            let value = HeaderValue::from_str(value.as_ref()).ok()?;
            Some((name, value))
        })
        .collect()
}
