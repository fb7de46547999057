//! Query client

use super::types::{ListPage, QueryParams, EMBED_PARAM};
use crate::content::ContentItem;
use crate::context::ContextConfig;
use crate::error::{Error, Result};
use crate::pagination::PaginationTracker;
use crate::transport::{Transport, TransportRequest};
use crate::types::ContentKind;
use serde_json::Value;
use tracing::debug;

/// Runs list and detail queries through an injected transport
#[derive(Debug)]
pub struct WpQuery<T> {
    context: ContextConfig,
    transport: T,
}

impl<T: Transport> WpQuery<T> {
    /// Create a query client
    pub fn new(context: ContextConfig, transport: T) -> Self {
        Self { context, transport }
    }

    /// The shared context
    pub fn context(&self) -> &ContextConfig {
        &self.context
    }

    /// The injected transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for a list query
    pub fn list_request(&self, resource: &str, params: &QueryParams) -> TransportRequest {
        TransportRequest {
            url: self.context.build_url(&format!("/{resource}")),
            query: params.to_pairs(),
        }
    }

    /// Build the request for a detail query
    pub fn detail_request(&self, resource: &str, id: u64) -> TransportRequest {
        TransportRequest::new(self.context.build_url(&format!("/{resource}/{id}")))
            .query(EMBED_PARAM, "true")
    }

    /// Fetch one page of a resource
    ///
    /// A single-object payload is treated as a one-item list.
    pub async fn list(&self, resource: &str, params: &QueryParams) -> Result<ListPage> {
        let request = self.list_request(resource, params);
        debug!(url = %request.url, page = ?params.page, "Listing {resource}");

        let (payload, headers) = self.transport.fetch(request).await?.into_payload()?;
        let items = decode_items(payload, resource)?;

        let mut tracker = PaginationTracker::new(params.page);
        if let Some(headers) = &headers {
            tracker.set_headers(headers.clone());
        }

        debug!(
            count = items.len(),
            pages = tracker.pagination().pages,
            "Listed {resource}"
        );
        Ok(ListPage {
            items,
            headers,
            pagination: tracker.pagination(),
        })
    }

    /// Fetch a single item by id
    ///
    /// An array payload yields its first element. A non-2xx envelope fails
    /// with [`Error::HttpStatus`] whichever transport produced it.
    pub async fn get(&self, resource: &str, id: u64) -> Result<ContentItem> {
        let request = self.detail_request(resource, id);
        debug!(url = %request.url, "Fetching {resource}/{id}");

        let (payload, _) = self.transport.fetch(request).await?.into_payload()?;
        decode_item(payload, resource)
    }

    /// Fetch a single item by slug
    pub async fn get_by_slug(&self, resource: &str, slug: &str) -> Result<ContentItem> {
        let params = QueryParams::new().param("slug", slug);
        let page = self.list(resource, &params).await?;
        page.items
            .into_iter()
            .next()
            .ok_or_else(|| Error::EmptyDetail {
                resource: format!("{resource}?slug={slug}"),
            })
    }

    /// Fetch one page of posts
    pub async fn posts(&self, params: &QueryParams) -> Result<ListPage> {
        self.list(ContentKind::Post.resource(), params).await
    }

    /// Fetch one page of pages
    pub async fn pages(&self, params: &QueryParams) -> Result<ListPage> {
        self.list(ContentKind::Page.resource(), params).await
    }
}

fn decode_items(payload: Value, resource: &str) -> Result<Vec<ContentItem>> {
    match payload {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| parse_item(entry, resource))
            .collect(),
        Value::Object(_) => Ok(vec![parse_item(payload, resource)?]),
        other => Err(unexpected_payload(&other, resource)),
    }
}

fn decode_item(payload: Value, resource: &str) -> Result<ContentItem> {
    match payload {
        Value::Array(entries) => match entries.into_iter().next() {
            Some(entry) => parse_item(entry, resource),
            None => Err(Error::EmptyDetail {
                resource: resource.to_string(),
            }),
        },
        Value::Object(_) => parse_item(payload, resource),
        other => Err(unexpected_payload(&other, resource)),
    }
}

fn parse_item(value: Value, resource: &str) -> Result<ContentItem> {
    serde_json::from_value(value)
        .map_err(|e| Error::decode(format!("Invalid {resource} item: {e}")))
}

fn unexpected_payload(value: &Value, resource: &str) -> Error {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::decode(format!("Expected {resource} item(s), got {kind}"))
}
