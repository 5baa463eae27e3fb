//! Purpose: Validation bags for decoded DeepL API response payloads.
//! Exports: `bag` (shared contract + endpoint bags), `error` (bag errors).
//! Role: Library boundary between a JSON decoder and callers reading validated payloads.
//! Invariants: Payloads are stored verbatim; construction either fully succeeds or fully fails.
pub mod bag;
pub mod error;

pub use bag::sentences::SentencesBag;
pub use bag::translation::{Translation, TranslationBag};
pub use bag::{Bag, ResponseBag, verify_response_content};
pub use error::{BagError, BagErrorKind, to_error_code};
