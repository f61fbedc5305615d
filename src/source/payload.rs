//! Validation of raw backend payloads.
//!
//! History arrives as a JSON array. Each element is checked on its own:
//! malformed elements are rejected and reported, the rest go through.
//! Optional fields that are missing, `null` or blank all become `None`.

use crate::errors::{AppError, AppResult};
use crate::models::{AccountDetails, WorkRecord};
use crate::utils::date::normalize_date;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkRecordPayload {
    stage: String,
    start_date: String,
    #[serde(default)]
    start_hour: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    end_hour: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload {
    user_email: String,
    name: String,
    surname: String,
    position: String,
}

/// Result of validating a history payload.
#[derive(Debug, Default)]
pub struct ParsedHistory {
    pub records: Vec<WorkRecord>,
    /// `(index in payload, reason)` for every element left out.
    pub rejected: Vec<(usize, String)>,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_element(value: Value) -> AppResult<WorkRecord> {
    let p: WorkRecordPayload =
        serde_json::from_value(value).map_err(|e| AppError::InvalidRecord(e.to_string()))?;

    let start_date = p.start_date.trim();
    if start_date.is_empty() {
        return Err(AppError::InvalidRecord("empty startDate".into()));
    }

    Ok(WorkRecord {
        stage: p.stage.trim().to_string(),
        start_date: normalize_date(start_date),
        start_hour: non_blank(p.start_hour),
        end_date: non_blank(p.end_date).map(|d| normalize_date(&d)),
        end_hour: non_blank(p.end_hour),
    })
}

/// Validate an already-decoded history array.
pub fn history_from_value(value: Value) -> AppResult<ParsedHistory> {
    let Value::Array(items) = value else {
        return Err(AppError::Fetch("history payload is not a JSON array".into()));
    };

    let mut parsed = ParsedHistory::default();
    for (idx, item) in items.into_iter().enumerate() {
        match parse_element(item) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.rejected.push((idx, e.to_string())),
        }
    }
    Ok(parsed)
}

/// Decode and validate a history payload.
pub fn parse_history(json: &str) -> AppResult<ParsedHistory> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| AppError::Fetch(format!("malformed JSON: {e}")))?;
    history_from_value(value)
}

/// Decode account details. All four fields are required.
pub fn parse_account(json: &str) -> AppResult<AccountDetails> {
    let p: AccountPayload =
        serde_json::from_str(json).map_err(|e| AppError::AccountDetails(e.to_string()))?;

    Ok(AccountDetails {
        user_email: p.user_email.trim().to_string(),
        name: p.name.trim().to_string(),
        surname: p.surname.trim().to_string(),
        position: p.position.trim().to_string(),
    })
}
