use crate::core::calculator::duration::compute_duration;
use crate::models::WorkRecord;
use chrono::Duration;

/// Sum of the elapsed time of every closed, well-formed shift.
/// Open, unstarted or invalid shifts add nothing.
pub fn aggregate_duration(records: &[WorkRecord]) -> Duration {
    let millis: i64 = records
        .iter()
        .filter_map(|r| compute_duration(r).elapsed())
        .map(|d| d.num_milliseconds())
        .sum();

    Duration::milliseconds(millis)
}
