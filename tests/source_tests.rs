mod common;

use common::{account_json, history_json, write_file};
use workhistory::errors::AppError;
use workhistory::source::{JsonFileSource, WorkHistorySource, parse_account, parse_history};

#[test]
fn test_parse_history_normalizes_and_rejects() {
    let parsed = parse_history(history_json()).unwrap();

    assert_eq!(parsed.records.len(), 4);
    assert_eq!(parsed.rejected.len(), 1);
    assert_eq!(parsed.rejected[0].0, 4);

    let second = &parsed.records[1];
    assert_eq!(second.start_date, "2025-03-07");

    let open = &parsed.records[2];
    assert_eq!(open.end_date, None);
    assert_eq!(open.end_hour, None);
    assert!(!open.is_closed());
}

#[test]
fn test_parse_history_requires_array() {
    let err = parse_history(r#"{"stage": "x"}"#).unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));

    let err = parse_history("not json").unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
}

#[test]
fn test_parse_history_rejects_blank_start_date() {
    let parsed = parse_history(r#"[{"stage": "x", "startDate": "  ", "startHour": "08:00:00"}]"#)
        .unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.rejected.len(), 1);
}

#[test]
fn test_parse_account() {
    let acc = parse_account(account_json()).unwrap();
    assert_eq!(acc.user_email, "anna.nowak@example.com");
    assert_eq!(acc.report_file_name(), "work_history_Anna_Nowak.pdf");

    let err = parse_account(r#"{"name": "Anna"}"#).unwrap_err();
    assert!(matches!(err, AppError::AccountDetails(_)));
}

#[test]
fn test_json_file_source_reads_plain_array() {
    let history = write_file("source_plain_history", "json", history_json());
    let account = write_file("source_plain_account", "json", account_json());
    let source = JsonFileSource::new(&history, &account);

    assert_eq!(source.fetch_work_history("anyone").unwrap().len(), 4);
    assert_eq!(source.fetch_account_details().unwrap().name, "Anna");
}

#[test]
fn test_json_file_source_selects_user() {
    let by_user = format!(r#"{{"anna": {}, "piotr": []}}"#, history_json());
    let history = write_file("source_by_user_history", "json", &by_user);
    let source = JsonFileSource::new(&history, "/nonexistent/account.json");

    assert_eq!(source.fetch_work_history("anna").unwrap().len(), 4);
    assert!(source.fetch_work_history("piotr").unwrap().is_empty());

    let err = source.fetch_work_history("ewa").unwrap_err();
    assert!(matches!(err, AppError::Fetch(msg) if msg.contains("ewa")));

    let err = source.fetch_account_details().unwrap_err();
    assert!(matches!(err, AppError::AccountDetails(_)));
}

#[test]
fn test_json_file_source_missing_file_is_fetch_error() {
    let source = JsonFileSource::new("/nonexistent/history.json", "/nonexistent/account.json");
    let err = source.fetch_work_history("anna").unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
}
