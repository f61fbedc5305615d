pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use date::{format_work_date, parse_date_input, parse_instant};
pub use formatting::{format_clock, format_compact, format_total};
