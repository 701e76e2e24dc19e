// Event DTOs for the public API
//
// Wire names are camelCase to match the original API surface consumed by the
// browser client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A calendar entry keyed by date with a holiday-type label and a derived
/// weekday name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event date in `YYYY-MM-DD` form. Sole lookup key.
    #[schema(example = "2025-03-31")]
    pub date: String,
    /// Holiday-type label, e.g. "Public" or "Observance".
    #[schema(example = "Public")]
    pub holiday_type: String,
    /// English weekday name, derived from `date` at creation time.
    #[schema(example = "Monday")]
    pub day: String,
    /// Additional descriptive fields, stored and returned verbatim.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Request to create an event.
///
/// `day` is ignored whenever `date` parses as `YYYY-MM-DD`; otherwise it is
/// kept as supplied. Unknown fields are opaque pass-through.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event date in `YYYY-MM-DD` form. Required, non-empty.
    #[serde(default)]
    #[schema(example = "2025-03-31")]
    pub date: String,
    /// Holiday-type label. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Public")]
    pub holiday_type: String,
    /// Weekday name. Only kept when `date` does not parse.
    #[serde(default)]
    pub day: String,
    /// Additional descriptive fields, stored and returned verbatim.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}
