pub mod calculator;
pub mod report;
pub mod view;

pub use report::{Alignment, ClosingLine, ReportDocument, build_report};
pub use view::WorkHistoryView;
