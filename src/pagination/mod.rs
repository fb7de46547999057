//! Pagination module
//!
//! Derives list pagination from the requested page and the
//! `x-wp-total` / `x-wp-totalpages` response headers.
//!
//! # Overview
//!
//! [`compute`] is a pure function of its inputs and is re-run in full on
//! every header update. [`PaginationTracker`] holds the state for one list
//! view: each `set_headers` call replaces the previous headers outright.

mod extractor;
mod tracker;
mod types;

pub use extractor::{compute, parse_header_int};
pub use tracker::{headers_from_pairs, PaginationTracker};
pub use types::{PaginationState, TOTAL_HEADER, TOTAL_PAGES_HEADER};
