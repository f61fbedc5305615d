//! ANSI colour helpers for terminal output.

use crate::models::ShiftDuration;
use ansi_term::Colour;

/// Colour used for a duration cell:
/// elapsed → green, in progress → yellow, not started → grey, invalid → red.
pub fn colour_for_duration(d: &ShiftDuration) -> Colour {
    match d {
        ShiftDuration::Elapsed(_) => Colour::Green,
        ShiftDuration::InProgress => Colour::Yellow,
        ShiftDuration::NotStarted => Colour::Fixed(244),
        ShiftDuration::Invalid => Colour::Red,
    }
}

pub fn paint_duration(text: &str, d: &ShiftDuration) -> String {
    colour_for_duration(d).paint(text).to_string()
}

/// Empty cells and placeholder values are dimmed.
pub fn dim_if_empty(text: &str) -> String {
    if text.trim().is_empty() || text.trim() == "--" {
        Colour::Fixed(244).paint(text).to_string()
    } else {
        text.to_string()
    }
}
