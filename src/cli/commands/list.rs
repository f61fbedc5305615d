use crate::cli::commands::{load_view, source_from};
use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::core::WorkHistoryView;
use crate::core::calculator::{compute_duration, duration_label};
use crate::core::report::REPORT_HEADERS;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{dim_if_empty, paint_duration};
use crate::utils::date::format_work_date;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

const DURATION_COL: usize = 5;

/// Handle the `list` command
pub fn handle(cfg: &Config, args: &ViewArgs, now: DateTime<Utc>) -> AppResult<()> {
    let source = source_from(cfg);
    let view = load_view(cfg, &source, args, now)?;

    print_view(&view, cfg.window_days);
    Ok(())
}

fn title(view: &WorkHistoryView, window_days: i64) -> String {
    if view.search_performed() {
        let (from, to) = view.search_inputs();
        format!("Work history {from} - {to}")
    } else {
        format!("Work history (last {window_days} days)")
    }
}

fn print_view(view: &WorkHistoryView, window_days: i64) {
    header(title(view, window_days));

    let records = view.records();
    if records.is_empty() {
        info("No work records in the selected period.");
        return;
    }

    let mut table = Table::new(&REPORT_HEADERS);
    for r in records {
        table.add_row(vec![
            r.stage.clone(),
            format_work_date(Some(&r.start_date)),
            r.start_hour_str().to_string(),
            format_work_date(r.end_date.as_deref()),
            r.end_hour_str().to_string(),
            duration_label(r),
        ]);
    }

    let rendered = table.render_with(|row, col, cell| {
        if col == DURATION_COL {
            paint_duration(&cell, &compute_duration(&records[row]))
        } else {
            dim_if_empty(&cell)
        }
    });

    print!("{rendered}");
    println!();
    println!(
        "{} {}  ({} records, sorted by {} {:?})",
        bold("Total:"),
        view.total_label(),
        records.len(),
        view.sort().key.as_str(),
        view.sort().direction
    );
}
