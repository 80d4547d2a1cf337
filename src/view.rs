//! Deriving the displayed list from the call collection.
//!
//! Pure functions over `&[Call]`: the status filter and search term come in
//! as explicit parameters, so the projection is testable without any UI
//! state and the collection order is never mutated.

use crate::model::{Call, CallStatus};

/// Which statuses the list should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Scheduled,
    Completed,
    Missed,
    Cancelled,
}

impl StatusFilter {
    fn admits(self, status: CallStatus) -> bool {
        match self {
            Self::All => true,
            Self::Scheduled => matches!(status, CallStatus::Scheduled),
            Self::Completed => matches!(status, CallStatus::Completed { .. }),
            Self::Missed => matches!(status, CallStatus::Missed),
            Self::Cancelled => matches!(status, CallStatus::Cancelled),
        }
    }
}

/// Aggregate counts over the unfiltered collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub missed: usize,
}

/// Derive the display list: filter by status, then search, then sort by
/// scheduled time descending (most future first).
///
/// The search term matches case-insensitively against customer name and
/// project type, and literally against the phone number. An empty term
/// matches everything. The sort is stable, so equal times keep insertion
/// order.
pub fn project<'a>(calls: &'a [Call], filter: StatusFilter, search: &str) -> Vec<&'a Call> {
    let needle = search.to_lowercase();
    let mut shown: Vec<&Call> = calls
        .iter()
        .filter(|call| filter.admits(call.status))
        .filter(|call| matches_search(call, search, &needle))
        .collect();
    shown.sort_by(|a, b| b.scheduled_time.cmp(&a.scheduled_time));
    shown
}

fn matches_search(call: &Call, raw: &str, needle: &str) -> bool {
    call.customer_name.to_lowercase().contains(needle)
        || call.phone.contains(raw)
        || call
            .project_type
            .as_ref()
            .is_some_and(|p| p.to_lowercase().contains(needle))
}

/// Count calls by outcome over the full, unfiltered collection.
///
/// Recomputed on every render; collections here are small enough that
/// caching would be noise.
pub fn counts(calls: &[Call]) -> Counts {
    let mut counts = Counts {
        total: calls.len(),
        ..Counts::default()
    };
    for call in calls {
        match call.status {
            CallStatus::Scheduled => counts.scheduled += 1,
            CallStatus::Completed { .. } => counts.completed += 1,
            CallStatus::Missed => counts.missed += 1,
            CallStatus::Cancelled => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    fn call(name: &str, phone: &str, time: &str, status: CallStatus) -> Call {
        Call {
            id: Uuid::new_v4(),
            customer_name: name.into(),
            phone: phone.into(),
            scheduled_time: time.parse().unwrap(),
            status,
            notes: String::new(),
            project_type: None,
        }
    }

    #[test]
    fn all_with_empty_term_returns_everything_most_future_first() {
        let calls = vec![
            call(
                "CallB",
                "2",
                "2024-01-05T10:00:00Z",
                CallStatus::Completed { duration: 20 },
            ),
            call("CallA", "1", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
        ];

        let shown = project(&calls, StatusFilter::All, "");

        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].customer_name, "CallA");
        assert_eq!(shown[1].customer_name, "CallB");
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let calls = vec![
            call("First", "1", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            call("Second", "2", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
        ];

        let shown = project(&calls, StatusFilter::All, "");

        assert_eq!(shown[0].customer_name, "First");
        assert_eq!(shown[1].customer_name, "Second");
    }

    #[test]
    fn status_filter_keeps_only_matching_calls() {
        let calls = vec![
            call("A", "1", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            call(
                "B",
                "2",
                "2024-01-09T10:00:00Z",
                CallStatus::Completed { duration: 30 },
            ),
            call("C", "3", "2024-01-08T10:00:00Z", CallStatus::Missed),
        ];

        let shown = project(&calls, StatusFilter::Completed, "");

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].customer_name, "B");
    }

    #[test]
    fn search_matches_name_and_project_case_insensitively() {
        let mut by_project = call("Other LLC", "1", "2024-01-09T10:00:00Z", CallStatus::Scheduled);
        by_project.project_type = Some("Acme Website".into());
        let calls = vec![
            call("Acme Corp", "2", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            by_project,
            call("Unrelated", "3", "2024-01-08T10:00:00Z", CallStatus::Scheduled),
        ];

        let shown = project(&calls, StatusFilter::All, "acme");

        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].customer_name, "Acme Corp");
        assert_eq!(shown[1].customer_name, "Other LLC");
    }

    #[test]
    fn search_matches_phone_literally() {
        let calls = vec![
            call("A", "+15550100", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            call("B", "+44700900", "2024-01-09T10:00:00Z", CallStatus::Scheduled),
        ];

        let shown = project(&calls, StatusFilter::All, "555");

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].customer_name, "A");
    }

    #[test]
    fn filter_and_search_compose() {
        let calls = vec![
            call("Acme Corp", "1", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            call(
                "Acme Corp",
                "2",
                "2024-01-09T10:00:00Z",
                CallStatus::Completed { duration: 15 },
            ),
        ];

        let shown = project(&calls, StatusFilter::Scheduled, "acme");

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].phone, "1");
    }

    #[test]
    fn counts_cover_the_unfiltered_collection() {
        let calls = vec![
            call("CallA", "1", "2024-01-10T10:00:00Z", CallStatus::Scheduled),
            call(
                "CallB",
                "2",
                "2024-01-05T10:00:00Z",
                CallStatus::Completed { duration: 20 },
            ),
        ];

        let counts = counts(&calls);

        assert_eq!(
            counts,
            Counts {
                total: 2,
                scheduled: 1,
                completed: 1,
                missed: 0,
            }
        );
    }

    #[test]
    fn cancelled_calls_count_toward_total_only() {
        let calls = vec![call(
            "A",
            "1",
            "2024-01-10T10:00:00Z",
            CallStatus::Cancelled,
        )];

        let counts = counts(&calls);

        assert_eq!(counts.total, 1);
        assert_eq!(counts.scheduled + counts.completed + counts.missed, 0);
    }
}
