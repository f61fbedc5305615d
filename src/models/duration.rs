use chrono::Duration;

/// Pseudo-duration labels shared by the list view and the PDF report.
pub const LABEL_NOT_STARTED: &str = "Brak godziny rozpoczęcia";
pub const LABEL_IN_PROGRESS: &str = "Praca w toku";
pub const LABEL_INVALID: &str = "Nieprawidłowa data lub godzina";

/// Elapsed time of a shift, or the reason it has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDuration {
    /// No start hour recorded.
    NotStarted,
    /// Started, not closed yet.
    InProgress,
    /// Both endpoints parsed; always non-negative and whole seconds.
    Elapsed(Duration),
    /// Endpoints present but unparseable, or end before start.
    Invalid,
}

impl ShiftDuration {
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            ShiftDuration::Elapsed(d) => Some(*d),
            _ => None,
        }
    }

    /// Ordering key for duration sorting. Anything without an elapsed
    /// value sorts after every real duration.
    pub fn sort_key(&self) -> i64 {
        self.elapsed().map(|d| d.num_milliseconds()).unwrap_or(i64::MAX)
    }

    /// Label for entries that carry no elapsed time.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ShiftDuration::NotStarted => Some(LABEL_NOT_STARTED),
            ShiftDuration::InProgress => Some(LABEL_IN_PROGRESS),
            ShiftDuration::Invalid => Some(LABEL_INVALID),
            ShiftDuration::Elapsed(_) => None,
        }
    }
}
