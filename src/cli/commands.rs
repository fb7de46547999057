//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query a WordPress-style REST content API
#[derive(Parser, Debug)]
#[command(name = "wp-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site configuration file (YAML)
    #[arg(short, long, global = true)]
    pub site: Option<PathBuf>,

    /// API base URL (overrides the site file)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Route namespace (overrides the site file)
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of a resource
    List {
        /// Resource name (e.g. posts, pages)
        #[arg(default_value = "posts")]
        resource: String,

        /// Page to fetch
        #[arg(short, long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        per_page: Option<u32>,

        /// Full-text search
        #[arg(long)]
        search: Option<String>,

        /// Featured media size to resolve
        #[arg(long, default_value = "full")]
        size: String,

        /// Do not request embedded relations
        #[arg(long)]
        no_embed: bool,
    },

    /// Fetch a single item by id
    Get {
        /// Resource name (e.g. posts, pages)
        resource: String,

        /// Item id
        id: u64,

        /// Featured media size to resolve
        #[arg(long, default_value = "full")]
        size: String,
    },

    /// Print the full URL for a path
    Url {
        /// Path appended after the namespace (e.g. /posts)
        path: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
