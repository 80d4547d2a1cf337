//! Output formatting for CLI display.

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::model::{Call, CallStatus};
use crate::view::Counts;

/// Format one call as a display line, with notes indented below if present.
pub(super) fn format_call(call: &Call) -> String {
    let short_id = &call.id.to_string()[..8];
    let when = call
        .scheduled_time
        .to_zoned(TimeZone::system())
        .strftime("%b %d, %Y %I:%M %p");

    let mut line = format!(
        "{short_id}  [{}]  {}  {}  {when}",
        call.status.label(),
        call.customer_name,
        call.phone,
    );
    if let Some(project) = &call.project_type {
        let _ = write!(line, "  ({project})");
    }
    if let CallStatus::Completed { duration } = call.status {
        let _ = write!(line, "  {duration} min");
    }
    if !call.notes.is_empty() {
        let _ = write!(line, "\n          {}", call.notes);
    }
    line
}

/// One-line counts summary, shown under the list and by `stats`.
pub(super) fn format_counts(counts: &Counts) -> String {
    format!(
        "{} calls · {} scheduled · {} completed · {} missed",
        counts.total, counts.scheduled, counts.completed, counts.missed
    )
}
