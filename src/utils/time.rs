//! Duration helpers shared by the calculators.

use chrono::{DateTime, Duration, Utc};

/// Drop sub-second precision (truncation, never rounding).
pub fn truncate_to_seconds(d: Duration) -> Duration {
    Duration::seconds(d.num_seconds())
}

/// `end - start` truncated to whole seconds, or `None` when negative.
pub fn elapsed_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Duration> {
    let delta = end - start;
    if delta < Duration::zero() {
        return None;
    }
    Some(truncate_to_seconds(delta))
}
