// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # wp-query
//!
//! A client-side data-access layer for WordPress-style REST content APIs.
//! Templates ask for posts and pages; this crate normalizes the response,
//! parses pagination headers and resolves the relations embedded in each
//! item (authors, taxonomy terms, featured media).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wp_query::{ContextConfig, HttpTransport, QueryParams, WpQuery};
//!
//! #[tokio::main]
//! async fn main() -> wp_query::Result<()> {
//!     let context = ContextConfig::new("https://example.com/wp-json");
//!     let query = WpQuery::new(context, HttpTransport::new()?);
//!
//!     let page = query.posts(&QueryParams::new().page(2)).await?;
//!     for post in &page.items {
//!         let relations = post.relations();
//!         let categories = relations.categories();
//!         let image = relations.media("thumbnail");
//!     }
//!     if page.pagination.has_next {
//!         // link to page 3
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ContextConfig ──► build_url ──► Transport (injected) ──► TransportOutput
//!                                                            │
//!                                 is_response_envelope ◄─────┘
//!                                    │             │
//!                               headers          payload
//!                                    │             │
//!                          pagination::compute   ContentItem ──► RelationResolver
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Immutable request context
pub mod context;

/// Content items
pub mod content;

/// Embedded relation normalization and lookup
pub mod embedded;

/// Response envelope classification
pub mod response;

/// Pagination state from response headers
pub mod pagination;

/// Request-performing seam
pub mod transport;

/// List and detail queries
pub mod query;

/// Site configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::ContentKind;

pub use config::{load_site_config, SiteConfig};
pub use content::{ContentItem, Field, Rendered};
pub use context::{ClickEvent, ClickKind, ContextConfig};
pub use embedded::{Author, EmbeddedRelations, FeaturedMedia, RelationResolver, Term};
pub use pagination::{compute, PaginationState, PaginationTracker};
pub use query::{ListPage, QueryParams, WpQuery};
pub use response::{is_response_envelope, ResponseEnvelope, TransportOutput};
pub use transport::{transport_fn, HttpTransport, Transport, TransportRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
