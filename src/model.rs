//! Core data model for Callbook.
//!
//! A `Call` is one scheduled or past customer call. The durable slot stores
//! a flat JSON array of these records, so the serde attributes here pin the
//! on-disk schema: camelCase keys, ISO-8601 scheduled times, a plain
//! `"status"` string with `duration` beside it only on completed calls.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled or past customer call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub scheduled_time: Timestamp,

    /// Flattened so the record carries the status tag and its duration as
    /// sibling keys rather than a nested object.
    #[serde(flatten)]
    pub status: CallStatus,

    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

/// Where a call stands in its lifecycle.
///
/// `duration` lives on `Completed` so a call can only carry one once it has
/// actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CallStatus {
    /// On the calendar, outcome not yet known. Every call starts here.
    Scheduled,

    /// The call took place.
    Completed {
        /// How long the call ran, in minutes.
        duration: u32,
    },

    /// Nobody picked up.
    Missed,

    /// Called off before it happened.
    Cancelled,
}

impl CallStatus {
    /// Lowercase label, matching the serialized tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed { .. } => "completed",
            Self::Missed => "missed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// An add-call request, as collected from the user.
///
/// `scheduled_time` stays a raw string here; the store parses and validates
/// it so a rejected draft leaves the collection untouched.
#[derive(Debug, Clone)]
pub struct CallDraft {
    pub customer_name: String,
    pub phone: String,
    pub scheduled_time: String,
    pub project_type: Option<String>,
    pub notes: String,
}
