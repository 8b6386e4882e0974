//! Location records and visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A location recorded in the diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    /// Links the location to a venue in the trace-location catalogue, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_location_id: Option<String>,
}

/// A single recorded visit to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationVisit {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circumstances: Option<String>,
    /// Opaque link into the check-in store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_id: Option<i64>,
}
