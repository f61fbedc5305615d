// src/export/mod.rs

mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod renderer;

pub use logic::ExportLogic;
pub use model::WorkRecordExport;
pub use pdf::PdfManager;
pub use pdf_export::PdfRenderer;
pub use renderer::{RenderedReport, ReportRenderer};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}
