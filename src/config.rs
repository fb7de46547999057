//! Site configuration
//!
//! A YAML document describing which API to query and how. It is turned into
//! the immutable [`ContextConfig`] and an [`HttpTransportConfig`] once, at
//! startup.
//!
//! ```yaml
//! api: https://example.com/wp-json
//! namespace: /wp/v2
//! per_page: 10
//! date_format: "%B %-d, %Y"
//! headers:
//!   X-Site: blog
//! ```

use crate::context::{chrono_formatter, ContextConfig, DEFAULT_NAMESPACE};
use crate::error::{Error, Result, ResultExt};
use crate::transport::HttpTransportConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Largest page size the API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Site configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// API base URL (e.g. `https://example.com/wp-json`)
    pub api: String,

    /// Route namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Default items per page for list queries
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Ask for embedded relations
    #[serde(default = "default_true")]
    pub embed: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// strftime pattern for displayed dates
    #[serde(default)]
    pub date_format: Option<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("wp-query/{}", env!("CARGO_PKG_VERSION"))
}

impl SiteConfig {
    /// Create a config for an API base with all defaults
    pub fn new(api: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            namespace: default_namespace(),
            per_page: None,
            embed: true,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            date_format: None,
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.api.trim().is_empty() {
            return Err(Error::missing_field("api"));
        }

        let url = Url::parse(&self.api)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "api",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if !self.namespace.is_empty() && !self.namespace.starts_with('/') {
            return Err(Error::invalid_value("namespace", "must start with '/'"));
        }

        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(Error::invalid_value(
                    "per_page",
                    format!("must be between 1 and {MAX_PER_PAGE}"),
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }

        Ok(())
    }

    /// Build the immutable request context
    ///
    /// A trailing slash on `api` is dropped so URLs concatenate cleanly.
    pub fn to_context(&self) -> Result<ContextConfig> {
        let mut builder = ContextConfig::builder(self.api.trim_end_matches('/'))
            .namespace(self.namespace.clone());

        if let Some(pattern) = &self.date_format {
            builder = builder.shared_date_formatter(chrono_formatter(pattern.clone())?);
        }

        Ok(builder.build())
    }

    /// Build the HTTP transport configuration
    pub fn transport_config(&self) -> HttpTransportConfig {
        let mut builder = HttpTransportConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(self.user_agent.clone());

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

/// Load a site config from a YAML file
pub fn load_site_config(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read site config {}", path.display()))?;
    SiteConfig::from_yaml_str(&content)
        .with_context(|| format!("Invalid site config {}", path.display()))
}
