//! Immutable context configuration

use super::types::{ClickEvent, ClickHandler, DateFormatter};
use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime};
use std::sync::Arc;
use tracing::trace;

/// Namespace used when none is given
pub const DEFAULT_NAMESPACE: &str = "/wp/v2";

/// Timestamp layout WordPress uses for `date` (site-local, no offset)
const WP_DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// Request configuration shared by queries and resolvers
///
/// Fields are read-only once built. Cloning shares the callbacks.
#[derive(Clone)]
pub struct ContextConfig {
    api: String,
    namespace: String,
    click_handler: Option<ClickHandler>,
    date_formatter: Option<DateFormatter>,
}

impl ContextConfig {
    /// Create a config with the default namespace and no callbacks
    pub fn new(api: impl Into<String>) -> Self {
        Self::builder(api).build()
    }

    /// Create a new config builder
    pub fn builder(api: impl Into<String>) -> ContextConfigBuilder {
        ContextConfigBuilder {
            config: Self {
                api: api.into(),
                namespace: DEFAULT_NAMESPACE.to_string(),
                click_handler: None,
                date_formatter: None,
            },
        }
    }

    /// API base (e.g. `https://example.com/wp-json`)
    pub fn api(&self) -> &str {
        &self.api
    }

    /// Path namespace (e.g. `/wp/v2`)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Click handler, if one was installed
    pub fn click_handler(&self) -> Option<&ClickHandler> {
        self.click_handler.as_ref()
    }

    /// Date formatter, if one was installed
    pub fn date_formatter(&self) -> Option<&DateFormatter> {
        self.date_formatter.as_ref()
    }

    /// Build a full URL as `api + namespace + path`
    ///
    /// Plain concatenation: no separators are added or trimmed.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}{}", self.api, self.namespace, path)
    }

    /// Hand a click event to the handler
    ///
    /// Returns `true` if a handler was installed and invoked.
    pub fn emit_click(&self, event: &ClickEvent) -> bool {
        match &self.click_handler {
            Some(handler) => {
                trace!(kind = ?event.kind, name = %event.values.name, "Dispatching click event");
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Format a timestamp with the installed formatter, if any
    pub fn format_date(&self, raw: &str) -> Option<String> {
        self.date_formatter.as_ref().map(|formatter| formatter(raw))
    }
}

impl std::fmt::Debug for ContextConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextConfig")
            .field("api", &self.api)
            .field("namespace", &self.namespace)
            .field("has_click_handler", &self.click_handler.is_some())
            .field("has_date_formatter", &self.date_formatter.is_some())
            .finish()
    }
}

/// Builder for [`ContextConfig`]
pub struct ContextConfigBuilder {
    config: ContextConfig,
}

impl ContextConfigBuilder {
    /// Set the path namespace
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the click handler
    #[must_use]
    pub fn click_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        self.config.click_handler = Some(Arc::new(handler));
        self
    }

    /// Set the date formatter
    #[must_use]
    pub fn date_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.config.date_formatter = Some(Arc::new(formatter));
        self
    }

    /// Set an already shared date formatter
    #[must_use]
    pub fn shared_date_formatter(mut self, formatter: DateFormatter) -> Self {
        self.config.date_formatter = Some(formatter);
        self
    }

    /// Build the config
    pub fn build(self) -> ContextConfig {
        self.config
    }
}

/// Create a date formatter rendering timestamps with a strftime pattern
///
/// Accepts WordPress local timestamps (`2024-01-15T10:30:00`) and RFC 3339.
/// Timestamps that parse as neither are returned unchanged.
pub fn chrono_formatter(pattern: impl Into<String>) -> Result<DateFormatter> {
    let pattern = pattern.into();
    if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::invalid_value(
            "date_format",
            format!("invalid strftime pattern '{pattern}'"),
        ));
    }

    Ok(Arc::new(move |raw: &str| {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, WP_DATE_LAYOUT) {
            return naive.format(&pattern).to_string();
        }
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.format(&pattern).to_string(),
            Err(_) => raw.to_string(),
        }
    }))
}
