// src/export/model.rs

use crate::core::calculator::{compute_duration, duration_label};
use crate::models::WorkRecord;
use crate::utils::date::format_work_date;
use serde::Serialize;

/// Flat row for CSV / JSON export of the current view.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkRecordExport {
    pub stage: String,
    pub start_date: String,
    pub start_hour: String,
    pub end_date: String,
    pub end_hour: String,
    pub duration: String,
    /// Elapsed seconds; empty for open or invalid shifts.
    pub duration_seconds: Option<i64>,
}

impl From<&WorkRecord> for WorkRecordExport {
    fn from(r: &WorkRecord) -> Self {
        Self {
            stage: r.stage.clone(),
            start_date: format_work_date(Some(&r.start_date)),
            start_hour: r.start_hour_str().to_string(),
            end_date: format_work_date(r.end_date.as_deref()),
            end_hour: r.end_hour_str().to_string(),
            duration: duration_label(r),
            duration_seconds: compute_duration(r).elapsed().map(|d| d.num_seconds()),
        }
    }
}

pub(crate) fn records_to_export(records: &[WorkRecord]) -> Vec<WorkRecordExport> {
    records.iter().map(WorkRecordExport::from).collect()
}
