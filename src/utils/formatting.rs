//! Formatting utilities used for CLI and export outputs.

use chrono::Duration;
use unicode_width::UnicodeWidthStr;

const SECS_PER_DAY: i64 = 86_400;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (Polish diacritics count as one column).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Total worked time, e.g. `1h 30m 45s`. Hours are not wrapped into days.
pub fn format_total(d: Duration) -> String {
    let secs = d.num_milliseconds().max(0) / 1000;
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Compact report form, e.g. `8h 5m`.
pub fn format_compact(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

/// Clock form for the list view: `08:05:00`, or `1d 02:00:00` past a day.
pub fn format_clock(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    let days = secs / SECS_PER_DAY;
    let rest = secs % SECS_PER_DAY;
    let clock = format!("{:02}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    if days > 0 {
        format!("{}d {}", days, clock)
    } else {
        clock
    }
}
