//! Generation results.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A structured record: one JSON object from a schema-constrained response.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// What a generation call produced.
///
/// A schema-constrained call yields `StructuredList` only when the payload
/// decodes as an array of objects; anything else degrades to the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GenerationResult {
    /// Free text, untouched.
    PlainText(String),
    /// Decoded records in response order.
    StructuredList(Vec<Record>),
}

impl GenerationResult {
    /// Decode a schema-constrained payload.
    ///
    /// Returns the decode failure alongside the degraded result so the caller
    /// can log it.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldsmith_core::GenerationResult;
    ///
    /// let (ok, err) = GenerationResult::decode_structured(r#"[{"title":"A"}]"#);
    /// assert!(err.is_none());
    /// assert_eq!(ok.records().map(|r| r.len()), Some(1));
    ///
    /// let (raw, err) = GenerationResult::decode_structured("not json");
    /// assert!(err.is_some());
    /// assert_eq!(raw, GenerationResult::PlainText("not json".to_string()));
    /// ```
    pub fn decode_structured(raw: &str) -> (Self, Option<String>) {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => {
                let mut records = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::Object(map) => records.push(map),
                        other => {
                            return (
                                GenerationResult::PlainText(raw.to_string()),
                                Some(format!("array element is not an object: {other}")),
                            );
                        }
                    }
                }
                (GenerationResult::StructuredList(records), None)
            }
            Ok(_) => (
                GenerationResult::PlainText(raw.to_string()),
                Some("payload is not an array".to_string()),
            ),
            Err(e) => (GenerationResult::PlainText(raw.to_string()), Some(e.to_string())),
        }
    }

    /// The text, if this is a plain-text result.
    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::PlainText(text) => Some(text),
            GenerationResult::StructuredList(_) => None,
        }
    }

    /// The records, if this is a structured result.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            GenerationResult::StructuredList(records) => Some(records),
            GenerationResult::PlainText(_) => None,
        }
    }

    /// Text form of any result; structured results are re-serialized.
    pub fn into_text(self) -> String {
        match self {
            GenerationResult::PlainText(text) => text,
            GenerationResult::StructuredList(records) => {
                serde_json::to_string(&records).unwrap_or_default()
            }
        }
    }

    /// Records converted to `T`, or an empty list when this is not a list.
    ///
    /// Records that do not convert are skipped.
    pub fn into_list<T: DeserializeOwned>(self) -> Vec<T> {
        match self {
            GenerationResult::StructuredList(records) => records
                .into_iter()
                .filter_map(|record| {
                    serde_json::from_value(serde_json::Value::Object(record)).ok()
                })
                .collect(),
            GenerationResult::PlainText(_) => Vec::new(),
        }
    }
}
