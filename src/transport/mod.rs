//! Transport module
//!
//! The request-performing seam. Queries never talk to the network
//! directly; they hand a [`TransportRequest`] to an injected [`Transport`].
//!
//! # Implementations
//!
//! - [`HttpTransport`]: `reqwest`-backed, returns response envelopes
//! - [`FnTransport`]: wraps an async closure returning untyped JSON
//!
//! Caching, retries and authentication belong to whoever supplies the
//! transport.

mod client;
mod types;

pub use client::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder};
pub use types::{transport_fn, FnTransport, Transport, TransportRequest};
