//! Purpose: Validate and wrap decoded DeepL response payloads.
//! Exports: `Bag`, `ResponseBag`, `verify_response_content`.
//! Role: Shared construction contract for all endpoint-specific bags.
//! Invariants: A constructed bag always holds a JSON object free of the API error indicator.
//! Invariants: Stored payloads are kept verbatim; no copy, no normalization, no reordering.

pub mod sentences;
pub mod translation;

use crate::error::BagError;
use serde_json::Value;

/// Shared surface for response bags: validate-and-construct plus verbatim
/// access to the stored payload.
pub trait Bag: Sized {
    /// Verifies the decoded payload and wraps it. Either the whole payload
    /// is accepted or no bag is produced.
    fn from_payload(content: Value) -> Result<Self, BagError>;

    /// The stored payload, exactly as validated.
    fn response_content(&self) -> &Value;
}

/// A validated response payload. Endpoint-specific bags compose one of
/// these and layer typed accessors on top.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseBag {
    content: Value,
}

impl ResponseBag {
    pub fn new(content: Value) -> Result<Self, BagError> {
        verify_response_content(&content)?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn into_content(self) -> Value {
        self.content
    }
}

impl Bag for ResponseBag {
    fn from_payload(content: Value) -> Result<Self, BagError> {
        Self::new(content)
    }

    fn response_content(&self) -> &Value {
        &self.content
    }
}

/// Verifies that a decoded payload is a valid DeepL API call result.
///
/// The value must be a JSON object; top-level arrays, scalars, and null
/// are rejected. An object with a top-level `message` key carries the
/// API's error convention: the diagnostic text is read from the nested
/// `error.message` path, and reads as empty when that path is absent or
/// not a string.
pub fn verify_response_content(content: &Value) -> Result<(), BagError> {
    let Value::Object(fields) = content else {
        return Err(BagError::malformed_payload());
    };

    if fields.contains_key("message") {
        let detail = content
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(BagError::api_error(detail));
    }

    Ok(())
}
