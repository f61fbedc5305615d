pub mod collation;
pub mod duration;
pub mod filter;
pub mod sort;
pub mod total;

pub use duration::{compute_duration, duration_label};
pub use filter::filter_by_window;
pub use sort::sort_records;
pub use total::aggregate_duration;
