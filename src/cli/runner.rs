//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::summary::{ItemSummary, ListSummary};
use crate::config::{load_site_config, SiteConfig};
use crate::error::{Error, Result};
use crate::query::{QueryParams, WpQuery};
use crate::transport::HttpTransport;
use serde::Serialize;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let site = self.site_config()?;
        debug!(api = %site.api, namespace = %site.namespace, "Loaded site config");

        match &self.cli.command {
            Commands::List {
                resource,
                page,
                per_page,
                search,
                size,
                no_embed,
            } => {
                let mut params = QueryParams::new().embed(site.embed && !*no_embed);
                params.page = *page;
                params.per_page = per_page.or(site.per_page);
                params.search.clone_from(search);
                self.list(&site, resource, &params, size).await
            }
            Commands::Get { resource, id, size } => self.get(&site, resource, *id, size).await,
            Commands::Url { path } => {
                println!("{}", site.to_context()?.build_url(path));
                Ok(())
            }
        }
    }

    /// Resolve the site config from the file and flag overrides
    fn site_config(&self) -> Result<SiteConfig> {
        let mut site = match (&self.cli.site, &self.cli.api) {
            (Some(path), _) => load_site_config(path)?,
            (None, Some(api)) => SiteConfig::new(api.clone()),
            (None, None) => {
                return Err(Error::config(
                    "No site given (use --site <file> or --api <url>)",
                ))
            }
        };

        if let Some(api) = &self.cli.api {
            site.api.clone_from(api);
        }
        if let Some(namespace) = &self.cli.namespace {
            site.namespace.clone_from(namespace);
        }

        site.validate()?;
        Ok(site)
    }

    fn query(site: &SiteConfig) -> Result<WpQuery<HttpTransport>> {
        let transport = HttpTransport::with_config(site.transport_config())?;
        Ok(WpQuery::new(site.to_context()?, transport))
    }

    async fn list(
        &self,
        site: &SiteConfig,
        resource: &str,
        params: &QueryParams,
        size: &str,
    ) -> Result<()> {
        let query = Self::query(site)?;
        let page = query.list(resource, params).await?;

        let summary = ListSummary {
            items: page
                .items
                .iter()
                .map(|item| ItemSummary::from_item(item, query.context(), size))
                .collect(),
            pagination: page.pagination,
        };

        match self.cli.format {
            OutputFormat::Json => print_json(&summary),
            OutputFormat::Pretty => {
                print!("{}", summary.render_pretty());
                Ok(())
            }
        }
    }

    async fn get(&self, site: &SiteConfig, resource: &str, id: u64, size: &str) -> Result<()> {
        let query = Self::query(site)?;
        let item = query.get(resource, id).await?;
        let summary = ItemSummary::from_item(&item, query.context(), size);

        match self.cli.format {
            OutputFormat::Json => print_json(&summary),
            OutputFormat::Pretty => {
                print!("{}", summary.render_pretty());
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
