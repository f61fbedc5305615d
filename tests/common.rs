#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use workhistory::models::WorkRecord;

/// Fixed "now" used by every CLI test.
pub const NOW: &str = "2025-03-10T12:00:00Z";

pub fn wh() -> Command {
    cargo_bin_cmd!("workhistory")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhistory.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhistory_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn write_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

pub fn history_json() -> &'static str {
    r#"[
        {"stage": "Zakończona", "startDate": "2025-03-05", "startHour": "08:00:00",
         "endDate": "2025-03-05", "endHour": "16:30:00", "id": 11},
        {"stage": "Zakończona", "startDate": "2025-03-07T00:00:00", "startHour": "09:00:00",
         "endDate": "2025-03-07", "endHour": "12:15:30"},
        {"stage": "W toku", "startDate": "2025-03-10", "startHour": "07:45:00",
         "endDate": null, "endHour": ""},
        {"stage": "Archiwum", "startDate": "2025-02-01", "startHour": "08:00:00",
         "endDate": "2025-02-01", "endHour": "10:00:00"},
        {"stage": 5, "startDate": "2025-03-06"}
    ]"#
}

pub fn account_json() -> &'static str {
    r#"{"userEmail": "anna.nowak@example.com", "name": "Anna", "surname": "Nowak",
        "position": "Tester"}"#
}

/// Paths of the history file, account file and a logged-in token file.
pub struct Fixture {
    pub history: String,
    pub account: String,
    pub token: String,
}

pub fn setup(name: &str) -> Fixture {
    let history = write_file(&format!("{name}_history"), "json", history_json());
    let account = write_file(&format!("{name}_account"), "json", account_json());
    let token = write_file(&format!("{name}_token"), "txt", "secret-token");
    Fixture {
        history,
        account,
        token,
    }
}

impl Fixture {
    /// Global arguments pointing the binary at this fixture.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--test".into(),
            "--now".into(),
            NOW.into(),
            "--user".into(),
            "anna".into(),
            "--history".into(),
            self.history.clone(),
            "--account".into(),
            self.account.clone(),
            "--token-file".into(),
            self.token.clone(),
        ]
    }
}

pub fn closed(stage: &str, date: &str, start: &str, end: &str) -> WorkRecord {
    WorkRecord::closed(stage, date, start, date, end)
}

pub fn stages(records: &[WorkRecord]) -> Vec<&str> {
    records.iter().map(|r| r.stage.as_str()).collect()
}
