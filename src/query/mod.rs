//! Query module
//!
//! Ties the pieces together: builds the request from the context, runs it
//! through the injected transport, unwraps the result and derives
//! pagination from the response headers.

mod client;
mod types;

pub use client::WpQuery;
pub use types::{ListPage, QueryParams, EMBED_PARAM};
