use serde::{Deserialize, Serialize};

/// A single tracked shift as returned by the backend.
///
/// Dates are `YYYY-MM-DD`, hours are `HH:MM:SS`. A shift that is still
/// running has no `end_date`/`end_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub stage: String,
    pub start_date: String,
    #[serde(default)]
    pub start_hour: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_hour: Option<String>,
}

impl WorkRecord {
    /// Closed shift.
    pub fn closed(
        stage: &str,
        start_date: &str,
        start_hour: &str,
        end_date: &str,
        end_hour: &str,
    ) -> Self {
        Self {
            stage: stage.to_string(),
            start_date: start_date.to_string(),
            start_hour: Some(start_hour.to_string()),
            end_date: Some(end_date.to_string()),
            end_hour: Some(end_hour.to_string()),
        }
    }

    /// Shift that has started but not ended yet.
    pub fn open(stage: &str, start_date: &str, start_hour: &str) -> Self {
        Self {
            stage: stage.to_string(),
            start_date: start_date.to_string(),
            start_hour: Some(start_hour.to_string()),
            end_date: None,
            end_hour: None,
        }
    }

    pub fn start_hour_str(&self) -> &str {
        self.start_hour.as_deref().unwrap_or("")
    }

    pub fn end_hour_str(&self) -> &str {
        self.end_hour.as_deref().unwrap_or("")
    }

    pub fn is_closed(&self) -> bool {
        self.end_date.is_some() && self.end_hour.is_some()
    }
}
