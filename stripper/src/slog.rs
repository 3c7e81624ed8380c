//! Adapters for emitting cleaned records through `slog`.
//!
//! This module connects [`Record`] with `slog` by providing a `slog::Value`
//! that serializes the cleaned record as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is taken after `clean_fields()`,
//!   never from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::record::Record;

/// Placeholder logged when the cleaned record cannot be turned into JSON.
pub const SERIALIZE_FAILED: &str = "Failed to serialize cleaned value";

/// A `slog::Value` that emits an owned, cleaned payload as structured JSON.
pub struct CleanedJson {
    value: JsonValue,
}

impl CleanedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for CleanedJson {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts records into a `slog::Value` that logs their cleaned form as JSON.
///
/// Calling `into_cleaned_json` consumes the value, runs `clean_fields()`, and
/// stores the result as a `serde_json::Value`. The original values of flagged
/// fields are never serialized.
///
/// ## Example
/// ```ignore
/// use stripper::slog::IntoCleanedJson;
///
/// info!(logger, "login"; "user" => user.into_cleaned_json());
/// ```
pub trait IntoCleanedJson: Record + Serialize {
    /// Cleans `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// If converting the cleaned record into `serde_json::Value` fails, the
    /// returned value holds the JSON string [`SERIALIZE_FAILED`].
    fn into_cleaned_json(mut self) -> CleanedJson {
        self.clean_fields();
        let json_value = serde_json::to_value(&self)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED.to_string()));
        CleanedJson::new(json_value)
    }
}

impl<T> IntoCleanedJson for T where T: Record + Serialize {}
