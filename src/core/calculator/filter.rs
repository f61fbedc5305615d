use crate::models::{FilterWindow, WorkRecord};
use crate::utils::date::parse_optional_instant;
use chrono::{DateTime, Utc};

/// Start instant of a shift (`start_date` + `start_hour`), if parseable.
pub fn start_instant(record: &WorkRecord) -> Option<DateTime<Utc>> {
    parse_optional_instant(Some(&record.start_date), record.start_hour.as_deref())
}

/// Keep every shift that starts inside `window` (both edges included).
/// Shifts without a parseable start are dropped.
pub fn filter_by_window(records: &[WorkRecord], window: &FilterWindow) -> Vec<WorkRecord> {
    records
        .iter()
        .filter(|r| start_instant(r).is_some_and(|t| window.contains(t)))
        .cloned()
        .collect()
}
