//! Response module
//!
//! Tells a response envelope apart from a raw payload and unwraps either
//! into the parsed body plus any response headers.
//!
//! # Overview
//!
//! Transports may hand back a structured [`ResponseEnvelope`], an already
//! parsed payload, or an untyped JSON value that might be either. For the
//! untyped case [`is_response_envelope`] decides: any object carrying a
//! `json` member counts as an envelope.

mod classifier;
mod envelope;

pub use classifier::is_response_envelope;
pub use envelope::{header_map_from_json, ResponseEnvelope, TransportOutput};

#[cfg(test)]
mod tests;
