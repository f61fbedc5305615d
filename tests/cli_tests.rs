use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{Fixture, setup, temp_dir, temp_path, wh};

fn run_with(fx: &Fixture, args: &[&str]) -> assert_cmd::assert::Assert {
    wh().args(fx.args()).args(args).assert()
}

#[test]
fn test_list_default_window() {
    let fx = setup("cli_list_default");

    run_with(&fx, &["list"])
        .success()
        .stdout(contains("last 7 days"))
        .stdout(contains("2025-03-05"))
        .stdout(contains("2025-03-07"))
        .stdout(contains("Praca w toku"))
        .stdout(contains("11h 45m 30s"))
        .stdout(contains("2025-02-01").not())
        .stdout(contains("Skipping work record #4"));
}

#[test]
fn test_list_custom_range_and_sort() {
    let fx = setup("cli_list_range");

    run_with(
        &fx,
        &[
            "list", "--from", "2025-02-01", "--to", "2025-03-06", "--sort", "duration", "--dir",
            "desc",
        ],
    )
    .success()
    .stdout(contains("2025-02-01 - 2025-03-06"))
    .stdout(contains("10h 30m 0s"))
    .stdout(contains("sorted by duration"))
    .stdout(contains("2025-03-07").not());
}

#[test]
fn test_list_range_requires_both_ends() {
    let fx = setup("cli_list_half_range");
    run_with(&fx, &["list", "--from", "2025-02-01"]).failure();
}

#[test]
fn test_list_requires_login() {
    let fx = setup("cli_list_no_login");
    fs::remove_file(&fx.token).unwrap();

    run_with(&fx, &["list"])
        .failure()
        .stderr(contains("not logged in"));
}

#[test]
fn test_list_reports_fetch_failure() {
    let mut fx = setup("cli_list_fetch_fail");
    fx.history = temp_path("cli_list_fetch_fail_missing", "json");

    run_with(&fx, &["list"])
        .failure()
        .stdout(contains("Work history unavailable"))
        .stderr(contains("Failed to fetch work history"));
}

#[test]
fn test_export_pdf_to_out_dir() {
    let fx = setup("cli_export_pdf");
    let dir = temp_dir("cli_export_pdf");

    run_with(&fx, &["export", "--out-dir", &dir.to_string_lossy()])
        .success()
        .stdout(contains("PDF export completed"));

    let pdf = dir.join("work_history_Anna_Nowak.pdf");
    let bytes = fs::read(&pdf).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_pdf_to_out_dir_asks_before_replacing() {
    let fx = setup("cli_export_pdf_replace");
    let dir = temp_dir("cli_export_pdf_replace");
    let pdf = dir.join("work_history_Anna_Nowak.pdf");
    fs::write(&pdf, "old report").unwrap();

    wh().args(fx.args())
        .args(["export", "--out-dir", &dir.to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("previous export exists"));
    assert_eq!(fs::read_to_string(&pdf).unwrap(), "old report");

    wh().args(fx.args())
        .args(["export", "--out-dir", &dir.to_string_lossy()])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF-"));
}

#[test]
fn test_export_pdf_fails_without_account() {
    let mut fx = setup("cli_export_pdf_no_account");
    fx.account = temp_path("cli_export_pdf_no_account_missing", "json");
    let out = temp_path("cli_export_pdf_no_account", "pdf");

    run_with(&fx, &["export", "--file", &out])
        .failure()
        .stderr(contains("account details"));
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_csv() {
    let fx = setup("cli_export_csv");
    let out = temp_path("cli_export_csv", "csv");

    run_with(&fx, &["export", "--format", "csv", "--file", &out]).success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("stage,start_date,start_hour,end_date,end_hour,duration,duration_seconds")
    );
    assert!(content.contains("Zakończona,2025-03-05,08:00:00,2025-03-05,16:30:00,08:30:00,30600"));
    assert!(content.contains("W toku,2025-03-10,07:45:00,,,Praca w toku,"));
}

#[test]
fn test_export_json_range() {
    let fx = setup("cli_export_json");
    let out = temp_path("cli_export_json", "json");

    run_with(
        &fx,
        &[
            "export", "--format", "json", "--file", &out, "--from", "2025-02-01", "--to",
            "2025-02-28",
        ],
    )
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["stage"], "Archiwum");
    assert_eq!(rows[0]["duration_seconds"], 7200);
}

#[test]
fn test_export_csv_requires_file() {
    let fx = setup("cli_export_csv_nofile");
    run_with(&fx, &["export", "--format", "csv"])
        .failure()
        .stderr(contains("--file is required"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let fx = setup("cli_export_force");
    let out = temp_path("cli_export_force", "json");
    fs::write(&out, "old").unwrap();

    wh().args(fx.args())
        .args(["export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    run_with(&fx, &["export", "--format", "json", "--file", &out, "--force"]).success();
    assert!(fs::read_to_string(&out).unwrap().contains("Zakończona"));
}

#[test]
fn test_login_and_logout() {
    let fx = setup("cli_session");
    fs::remove_file(&fx.token).unwrap();

    run_with(&fx, &["login", "--token", "abc123"]).success();
    assert_eq!(fs::read_to_string(&fx.token).unwrap(), "abc123");

    run_with(&fx, &["list"]).success();

    run_with(&fx, &["logout"])
        .success()
        .stdout(contains("Logged out"));
    assert!(!Path::new(&fx.token).exists());

    run_with(&fx, &["logout"])
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn test_init_and_print_config() {
    let conf = temp_path("cli_init", "conf");

    wh().args(["--config", &conf, "init"]).assert().success();
    assert!(Path::new(&conf).exists());

    wh().args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    wh().args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("window_days: 7"))
        .stdout(contains("default_sort: none"));
}

#[test]
fn test_invalid_config_is_reported() {
    let conf = temp_path("cli_bad_config", "conf");
    fs::write(&conf, "window_days: [not, a, number]").unwrap();

    wh().args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to load configuration"));
}

#[test]
fn test_out_of_range_window_days_is_rejected() {
    let conf = temp_path("cli_huge_window", "conf");
    fs::write(&conf, "window_days: 200000000").unwrap();

    wh().args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("window_days must be between 1 and 36500"));
}
