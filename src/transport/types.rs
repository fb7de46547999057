//! Transport trait and request type

use crate::error::Result;
use crate::response::TransportOutput;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;

/// A GET request to perform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportRequest {
    /// Full URL without query string
    pub url: String,
    /// Query parameters in order
    pub query: Vec<(String, String)>,
}

impl TransportRequest {
    /// Create a request for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Performs requests on behalf of the query layer
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return an envelope or a raw payload
    async fn fetch(&self, request: TransportRequest) -> Result<TransportOutput>;
}

/// Transport backed by an async closure returning untyped JSON
///
/// The returned value is classified: an object with a `json` member is
/// unwrapped as an envelope, anything else is taken as the payload.
pub struct FnTransport<F> {
    func: F,
}

/// Wrap an async closure as a [`Transport`]
pub fn transport_fn<F, Fut>(func: F) -> FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    FnTransport { func }
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(TransportRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    async fn fetch(&self, request: TransportRequest) -> Result<TransportOutput> {
        let value = (self.func)(request).await?;
        Ok(TransportOutput::from(value))
    }
}

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}
