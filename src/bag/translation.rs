//! Purpose: Typed access to translate-call payloads.
//! Exports: `Translation`, `TranslationBag`.
//! Role: Endpoint bag over the `translations` rows of a translate response.
//! Invariants: Accessors are read-only probes; rows that do not match the row shape are skipped.

use crate::bag::{Bag, ResponseBag};
use crate::error::BagError;
use serde::Deserialize;
use serde_json::Value;

/// One row of a translate response.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Translation {
    pub text: String,
    pub detected_source_language: Option<String>,
}

/// Validated wrapper around a translate-call payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationBag {
    inner: ResponseBag,
}

impl TranslationBag {
    pub fn new(content: Value) -> Result<Self, BagError> {
        Ok(Self {
            inner: ResponseBag::new(content)?,
        })
    }

    /// All well-formed rows of `translations`, in payload order.
    pub fn translations(&self) -> Vec<Translation> {
        rows(self.inner.content())
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect()
    }

    /// Text of the first translation, if any.
    pub fn translation(&self) -> Option<String> {
        rows(self.inner.content())
            .first()
            .and_then(|row| row.get("text"))
            .and_then(Value::as_str)
            .map(|text| text.to_string())
    }

    /// Source language the API detected for the first translation.
    pub fn detected_source_language(&self) -> Option<String> {
        rows(self.inner.content())
            .first()
            .and_then(|row| row.get("detected_source_language"))
            .and_then(Value::as_str)
            .map(|lang| lang.to_string())
    }
}

impl Bag for TranslationBag {
    fn from_payload(content: Value) -> Result<Self, BagError> {
        Self::new(content)
    }

    fn response_content(&self) -> &Value {
        self.inner.content()
    }
}

fn rows(content: &Value) -> &[Value] {
    content
        .get("translations")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
