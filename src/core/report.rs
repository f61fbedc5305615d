//! Report document assembly.
//!
//! A [`ReportDocument`] is a renderer-neutral description of the work
//! history report: a title, identity lines, a string table and a styled
//! closing line. Renderers in `export` turn it into a file.

use crate::core::calculator::compute_duration;
use crate::models::{AccountDetails, ShiftDuration, WorkRecord};
use crate::utils::date::format_work_date;
use crate::utils::formatting::{format_compact, format_total};
use chrono::Duration;

pub const REPORT_TITLE: &str = "Historia pracy";

pub const REPORT_HEADERS: [&str; 6] = [
    "Stan",
    "Data rozpoczęcia",
    "Godzina rozpoczęcia",
    "Data zakończenia",
    "Godzina zakończenia",
    "Czas trwania",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Trailing line of the report with its own layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosingLine {
    pub text: String,
    pub alignment: Alignment,
    /// Space above the line, in points.
    pub margin_top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub lines: Vec<String>,
    /// First row is the header.
    pub table: Vec<Vec<String>>,
    pub closing: ClosingLine,
    pub file_name: String,
}

impl ReportDocument {
    pub fn header(&self) -> &[String] {
        self.table.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn body_rows(&self) -> &[Vec<String>] {
        self.table.get(1..).unwrap_or(&[])
    }
}

/// Duration cell of the report: `Hh Mm`, or a state label.
pub fn report_duration(record: &WorkRecord) -> String {
    match compute_duration(record) {
        ShiftDuration::Elapsed(d) => format_compact(d),
        other => other.label().unwrap_or_default().to_string(),
    }
}

fn record_row(record: &WorkRecord) -> Vec<String> {
    vec![
        record.stage.clone(),
        format_work_date(Some(&record.start_date)),
        record.start_hour_str().to_string(),
        format_work_date(record.end_date.as_deref()),
        record.end_hour_str().to_string(),
        report_duration(record),
    ]
}

/// Build the report for `records` (already filtered and sorted).
pub fn build_report(
    records: &[WorkRecord],
    account: &AccountDetails,
    total: Duration,
) -> ReportDocument {
    let mut table = Vec::with_capacity(records.len() + 1);
    table.push(REPORT_HEADERS.iter().map(|h| h.to_string()).collect());
    table.extend(records.iter().map(record_row));

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        lines: vec![
            format!("Email: {}", account.user_email),
            format!("Imie: {}", account.name),
            format!("Nazwisko: {}", account.surname),
            format!("Stanowisko: {}", account.position),
        ],
        table,
        closing: ClosingLine {
            text: format!(
                "Ilość godzin przepracowanych w danym okresie: {}",
                format_total(total)
            ),
            alignment: Alignment::Right,
            margin_top: 10.0,
        },
        file_name: account.report_file_name(),
    }
}
