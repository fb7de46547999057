//! Response-shape classifier

use serde_json::Value;

/// Member name that marks an envelope
pub(crate) const ENVELOPE_BODY_KEY: &str = "json";

/// Check whether a value is a response envelope rather than a raw payload
///
/// True for any object with a `json` member, whatever that member holds
/// (including `null` or a string). A missing member counts as undefined.
/// Never panics.
pub fn is_response_envelope(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key(ENVELOPE_BODY_KEY))
}
