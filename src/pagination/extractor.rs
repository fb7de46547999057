//! Pagination state extraction

use super::types::{PaginationState, TOTAL_HEADER, TOTAL_PAGES_HEADER};
use regex::Regex;
use reqwest::header::HeaderMap;
use std::sync::LazyLock;
use tracing::debug;

/// Leading integer of a header value, like `parseInt`: `"50"`, `" 7 "`, `"12abc"`
static LEADING_INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)(\d+)").unwrap());

/// Compute pagination state from the requested page and response headers
///
/// Missing or unparseable totals default to 1. `has_next` and `has_prev`
/// are false whenever no page was requested.
pub fn compute(requested_page: Option<u32>, headers: Option<&HeaderMap>) -> PaginationState {
    let total = header_count(headers, TOTAL_HEADER);
    let pages = header_count(headers, TOTAL_PAGES_HEADER);

    PaginationState {
        page: requested_page,
        pages,
        total,
        has_next: requested_page.is_some_and(|page| u64::from(page) < pages),
        has_prev: requested_page.is_some_and(|page| page > 1),
    }
}

/// Parse a count header value
///
/// Returns `None` for values without a leading integer, negative values and
/// values that overflow.
pub fn parse_header_int(value: &str) -> Option<u64> {
    let captures = LEADING_INT_REGEX.captures(value)?;
    let digits = captures.get(2)?.as_str();
    let parsed = digits.parse::<u64>().ok()?;

    if captures.get(1).is_some_and(|sign| sign.as_str() == "-") && parsed > 0 {
        return None;
    }
    Some(parsed)
}

fn header_count(headers: Option<&HeaderMap>, name: &str) -> u64 {
    let Some(value) = headers.and_then(|h| h.get(name)) else {
        return 1;
    };

    match value.to_str().ok().and_then(parse_header_int) {
        Some(count) if count >= 1 => count,
        _ => {
            debug!(header = name, value = ?value, "Unusable pagination header, defaulting to 1");
            1
        }
    }
}
