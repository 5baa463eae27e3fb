//! Purpose: Model validation failures for decoded DeepL response payloads.
//! Exports: `BagError`, `BagErrorKind`, `to_error_code`.
//! Role: Shared error contract for every response bag constructor.
//! Invariants: Numeric codes are stable once published; kinds are additive-only.
//! Invariants: `Display` renders the exact caller-facing message, nothing more.

use std::error::Error as StdError;
use std::fmt;

const MALFORMED_PAYLOAD_MESSAGE: &str =
    "DeepLy API call did not return JSON that describes a structured object";
const API_ERROR_PREFIX: &str = "DeepLy API call resulted in error: ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BagErrorKind {
    MalformedPayload,
    ApiError,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BagError {
    kind: BagErrorKind,
    message: String,
}

impl BagError {
    pub(crate) fn malformed_payload() -> Self {
        Self {
            kind: BagErrorKind::MalformedPayload,
            message: MALFORMED_PAYLOAD_MESSAGE.to_string(),
        }
    }

    // `detail` is the text at the payload's `error.message` path; callers
    // pass an empty string when that path is absent.
    pub(crate) fn api_error(detail: &str) -> Self {
        Self {
            kind: BagErrorKind::ApiError,
            message: format!("{API_ERROR_PREFIX}{detail}"),
        }
    }

    pub fn kind(&self) -> BagErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u32 {
        to_error_code(self.kind)
    }
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for BagError {}

pub fn to_error_code(kind: BagErrorKind) -> u32 {
    match kind {
        BagErrorKind::MalformedPayload => 10,
        BagErrorKind::ApiError => 20,
    }
}
