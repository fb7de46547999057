//! Response envelopes and transport output

use super::classifier::{is_response_envelope, ENVELOPE_BODY_KEY};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::trace;

/// A response-like value: status, headers and parsed JSON body
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// HTTP status code
    pub status: u16,
    /// Response headers (case-insensitive names)
    pub headers: HeaderMap,
    /// Parsed body
    pub body: Value,
}

impl ResponseEnvelope {
    /// Create an envelope with status 200 and no headers
    pub fn new(body: Value) -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Set the status code
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header; invalid names or values are ignored
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        insert_header(&mut self.headers, name, value);
        self
    }

    /// Check if the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx envelope into [`Error::HttpStatus`]
    ///
    /// The error body is the JSON body as text, matching what the HTTP
    /// transport reports for the same response.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::http_status(self.status, self.body.to_string()))
        }
    }
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

/// What a transport hands back
#[derive(Debug, Clone)]
pub enum TransportOutput {
    /// A response envelope to unwrap
    Envelope(ResponseEnvelope),
    /// An already parsed payload without headers
    Payload(Value),
}

impl TransportOutput {
    /// Check if this output is an envelope
    pub fn is_envelope(&self) -> bool {
        matches!(self, Self::Envelope(_))
    }

    /// Split into the parsed payload and the headers, if any
    ///
    /// The envelope status is not inspected; see [`Self::into_payload`].
    pub fn into_parts(self) -> (Value, Option<HeaderMap>) {
        match self {
            Self::Envelope(envelope) => (envelope.body, Some(envelope.headers)),
            Self::Payload(payload) => (payload, None),
        }
    }

    /// Split into payload and headers, failing on a non-2xx envelope
    pub fn into_payload(self) -> Result<(Value, Option<HeaderMap>)> {
        match self {
            Self::Envelope(envelope) => {
                let envelope = envelope.error_for_status()?;
                Ok((envelope.body, Some(envelope.headers)))
            }
            Self::Payload(payload) => Ok((payload, None)),
        }
    }
}

impl From<ResponseEnvelope> for TransportOutput {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self::Envelope(envelope)
    }
}

impl From<Value> for TransportOutput {
    /// Classify an untyped transport result
    ///
    /// Envelope-shaped objects yield their `json` member as the body, their
    /// `headers` object as headers and their numeric `status` (default 200).
    fn from(value: Value) -> Self {
        if !is_response_envelope(&value) {
            return Self::Payload(value);
        }

        let Value::Object(mut object) = value else {
            return Self::Payload(value);
        };

        let body = object.remove(ENVELOPE_BODY_KEY).unwrap_or(Value::Null);
        let headers = object
            .get("headers")
            .map(header_map_from_json)
            .unwrap_or_default();
        let status = object
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(200);

        Self::Envelope(ResponseEnvelope {
            status,
            headers,
            body,
        })
    }
}

/// Build a header map from a JSON object of name/value pairs
///
/// String, number and boolean values are kept; anything else is skipped.
pub fn header_map_from_json(value: &Value) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(object) = value.as_object() else {
        return headers;
    };

    for (name, value) in object {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                trace!(header = %name, "Skipping non-scalar header value");
                continue;
            }
        };
        insert_header(&mut headers, name, &text);
    }

    headers
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => trace!(header = %name, "Skipping invalid header"),
    }
}
