//! Purpose: Typed access to split-text payloads.
//! Exports: `SentencesBag`.
//! Role: Endpoint bag over the `splitted_texts` groups of a split-text response.

use crate::bag::{Bag, ResponseBag};
use crate::error::BagError;
use serde_json::Value;

/// Validated wrapper around a split-text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct SentencesBag {
    inner: ResponseBag,
}

impl SentencesBag {
    pub fn new(content: Value) -> Result<Self, BagError> {
        Ok(Self {
            inner: ResponseBag::new(content)?,
        })
    }

    /// Sentence groups from `splitted_texts`, one group per submitted
    /// text. Non-string entries are skipped.
    pub fn sentence_groups(&self) -> Vec<Vec<String>> {
        let Some(groups) = self
            .inner
            .content()
            .get("splitted_texts")
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        groups
            .iter()
            .map(|group| {
                group
                    .as_array()
                    .map(|sentences| {
                        sentences
                            .iter()
                            .filter_map(Value::as_str)
                            .map(|sentence| sentence.to_string())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Sentences of the first group, or empty when absent.
    pub fn sentences(&self) -> Vec<String> {
        self.sentence_groups().into_iter().next().unwrap_or_default()
    }
}

impl Bag for SentencesBag {
    fn from_payload(content: Value) -> Result<Self, BagError> {
        Self::new(content)
    }

    fn response_content(&self) -> &Value {
        self.inner.content()
    }
}

#[cfg(test)]
mod tests {
    use super::SentencesBag;
    use crate::bag::Bag;
    use crate::error::BagErrorKind;
    use serde_json::json;

    #[test]
    fn groups_preserve_payload_order() {
        let payload = json!({
            "splitted_texts": [
                ["One.", "Two."],
                ["Drei."]
            ]
        });
        let bag = SentencesBag::new(payload).expect("valid payload");

        assert_eq!(
            bag.sentence_groups(),
            vec![
                vec!["One.".to_string(), "Two.".to_string()],
                vec!["Drei.".to_string()],
            ]
        );
        assert_eq!(bag.sentences(), vec!["One.".to_string(), "Two.".to_string()]);
    }

    #[test]
    fn missing_splitted_texts_reads_empty() {
        let bag = SentencesBag::new(json!({})).expect("valid payload");
        assert!(bag.sentence_groups().is_empty());
        assert!(bag.sentences().is_empty());
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let payload = json!({
            "splitted_texts": [
                ["kept", 7, null],
                "not a group"
            ]
        });
        let bag = SentencesBag::new(payload).expect("valid payload");

        assert_eq!(
            bag.sentence_groups(),
            vec![vec!["kept".to_string()], Vec::new()]
        );
    }

    #[test]
    fn scalar_payload_does_not_construct() {
        let err = SentencesBag::from_payload(json!("oops")).expect_err("scalar payload");
        assert_eq!(err.kind(), BagErrorKind::MalformedPayload);
        assert_eq!(err.code(), 10);
    }
}
