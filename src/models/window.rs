use crate::utils::date::parse_date_input;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
/// Longest rolling window the configuration accepts (about a century).
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Inclusive range of instants used to select shifts by their start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FilterWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `[now - days, now]`. A start outside chrono's range is clamped to
    /// the nearest representable instant.
    pub fn last_days(now: DateTime<Utc>, days: i64) -> Self {
        let clamped = if days < 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        };
        let start = Duration::try_days(days)
            .and_then(|span| now.checked_sub_signed(span))
            .unwrap_or(clamped);
        Self::new(start, now)
    }

    pub fn last_7_days(now: DateTime<Utc>) -> Self {
        Self::last_days(now, DEFAULT_WINDOW_DAYS)
    }

    /// Window from two date-only inputs, both at midnight UTC.
    ///
    /// `start <= end` is not checked: an inverted window matches nothing.
    pub fn from_inputs(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_date_input(start)?, parse_date_input(end)?))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
