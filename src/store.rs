//! The in-memory call collection and its mutations.
//!
//! The store owns identity and validation but performs no I/O: callers load
//! it from storage, apply one mutation, and persist the result explicitly.
//! That keeps every operation here testable without a storage dependency.

use jiff::{Timestamp, civil, tz::TimeZone};
use uuid::Uuid;

use crate::model::{Call, CallDraft, CallStatus};

/// Errors that can occur when mutating the call collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid scheduled time: '{0}' (expected e.g. 2024-01-10T09:00)")]
    InvalidTime(String),

    #[error("call not found: {0}")]
    NotFound(Uuid),
}

pub type Result<T> = core::result::Result<T, StoreError>;

/// The full call collection for one session.
///
/// Held in insertion order; display order is always derived by
/// [`crate::view::project`], never stored.
#[derive(Debug, Default)]
pub struct CallStore {
    calls: Vec<Call>,
}

impl CallStore {
    /// Wraps a collection loaded from storage.
    pub fn new(calls: Vec<Call>) -> Self {
        Self { calls }
    }

    /// The unfiltered collection, in insertion order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Validates a draft and appends it as a new scheduled call.
    ///
    /// Rejects a blank customer name or phone, or a scheduled time that
    /// doesn't parse; on any rejection the collection is unchanged.
    pub fn add(&mut self, draft: CallDraft) -> Result<Call> {
        if draft.customer_name.trim().is_empty() {
            return Err(StoreError::MissingField("customer name"));
        }
        if draft.phone.trim().is_empty() {
            return Err(StoreError::MissingField("phone"));
        }
        let scheduled_time = parse_scheduled_time(&draft.scheduled_time)?;

        let call = Call {
            id: Uuid::new_v4(),
            customer_name: draft.customer_name,
            phone: draft.phone,
            scheduled_time,
            status: CallStatus::Scheduled,
            notes: draft.notes,
            project_type: draft.project_type.filter(|p| !p.trim().is_empty()),
        };
        self.calls.push(call.clone());
        Ok(call)
    }

    /// Replaces the status of the call with the given id.
    ///
    /// Every other field is preserved. The store does not police
    /// transitions — a completed call can be programmatically put back on
    /// the calendar — only the interaction surface limits itself to moves
    /// out of `Scheduled`.
    pub fn update_status(&mut self, id: Uuid, status: CallStatus) -> Result<()> {
        let call = self
            .calls
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        call.status = status;
        Ok(())
    }

    /// Removes the call with the given id.
    ///
    /// An absent id is a no-op, not an error — it usually means a stale
    /// reference. Returns whether the collection changed, so callers can
    /// skip the save when nothing did.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.calls.len();
        self.calls.retain(|c| c.id != id);
        self.calls.len() != before
    }
}

/// Parse a user-entered scheduled time.
///
/// Accepts a full RFC 3339 instant (`2024-01-10T09:00:00Z`) or a bare
/// civil datetime (`2024-01-10T09:00`), read in the system time zone.
fn parse_scheduled_time(raw: &str) -> Result<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::MissingField("scheduled time"));
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts);
    }
    let dt: civil::DateTime = raw
        .parse()
        .map_err(|_| StoreError::InvalidTime(raw.to_string()))?;
    let zoned = dt
        .to_zoned(TimeZone::system())
        .map_err(|_| StoreError::InvalidTime(raw.to_string()))?;
    Ok(zoned.timestamp())
}
