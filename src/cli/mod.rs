//! CLI module
//!
//! Command-line interface for querying a site.
//!
//! # Commands
//!
//! - `list` - Fetch one page of a resource with pagination state
//! - `get` - Fetch a single item by id
//! - `url` - Print the URL a path resolves to

mod commands;
mod runner;
mod summary;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use summary::{ItemSummary, ListSummary};
