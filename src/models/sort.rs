use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Stage label
    State,
    /// Start date (paired with the start hour)
    StartDate,
    /// End date (paired with the start hour)
    EndDate,
    /// Elapsed time
    Duration,
    /// Chronological by start, ignores direction
    #[default]
    None,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::State => "state",
            SortKey::StartDate => "startDate",
            SortKey::EndDate => "endDate",
            SortKey::Duration => "duration",
            SortKey::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}
