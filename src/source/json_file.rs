use crate::errors::{AppError, AppResult};
use crate::models::{AccountDetails, WorkRecord};
use crate::source::WorkHistorySource;
use crate::source::payload::{history_from_value, parse_account};
use crate::ui::messages::warning;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Source backed by JSON documents saved from the backend API.
///
/// The history file holds either the user's array of records or an object
/// mapping user ids to arrays.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    history_path: PathBuf,
    account_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(history_path: impl Into<PathBuf>, account_path: impl Into<PathBuf>) -> Self {
        Self {
            history_path: history_path.into(),
            account_path: account_path.into(),
        }
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    pub fn account_path(&self) -> &Path {
        &self.account_path
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}

impl WorkHistorySource for JsonFileSource {
    fn fetch_work_history(&self, user_id: &str) -> AppResult<Vec<WorkRecord>> {
        let raw = read(&self.history_path).map_err(AppError::Fetch)?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| AppError::Fetch(format!("malformed JSON: {e}")))?;

        let value = match value {
            Value::Object(mut by_user) => by_user
                .remove(user_id)
                .ok_or_else(|| AppError::Fetch(format!("no work history for user '{user_id}'")))?,
            other => other,
        };

        let parsed = history_from_value(value)?;
        for (idx, reason) in &parsed.rejected {
            warning(format!("Skipping work record #{idx}: {reason}"));
        }

        Ok(parsed.records)
    }

    fn fetch_account_details(&self) -> AppResult<AccountDetails> {
        let raw = read(&self.account_path).map_err(AppError::AccountDetails)?;
        parse_account(&raw)
    }
}
