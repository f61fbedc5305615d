use crate::models::{ShiftDuration, WorkRecord};
use crate::utils::date::parse_optional_instant;
use crate::utils::formatting::format_clock;
use crate::utils::time::elapsed_between;

/// Classify a shift and, when closed and well formed, measure it.
pub fn compute_duration(record: &WorkRecord) -> ShiftDuration {
    let Some(start_hour) = record.start_hour.as_deref() else {
        return ShiftDuration::NotStarted;
    };

    let Some(end_hour) = record.end_hour.as_deref() else {
        return ShiftDuration::InProgress;
    };

    let start = parse_optional_instant(Some(&record.start_date), Some(start_hour));
    let end = parse_optional_instant(record.end_date.as_deref(), Some(end_hour));

    match (start, end) {
        (Some(s), Some(e)) => elapsed_between(s, e)
            .map(ShiftDuration::Elapsed)
            .unwrap_or(ShiftDuration::Invalid),
        _ => ShiftDuration::Invalid,
    }
}

/// Duration as shown in the list view: `HH:MM:SS` (with a `Nd` prefix past
/// a day) or the state label.
pub fn duration_label(record: &WorkRecord) -> String {
    match compute_duration(record) {
        ShiftDuration::Elapsed(elapsed) => format_clock(elapsed),
        other => other.label().unwrap_or_default().to_string(),
    }
}
