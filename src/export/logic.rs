// src/export/logic.rs

use crate::core::WorkHistoryView;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_export;
use crate::export::notify_export_success;
use crate::export::pdf_export::PdfRenderer;
use crate::export::renderer::ReportRenderer;
use crate::source::WorkHistorySource;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// High-level export of the current derived view.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `view`'s filtered records.
    ///
    /// - `pdf`: the full report; without `file` it is downloaded as
    ///   `work_history_<name>_<surname>.pdf` into `out_dir`.
    /// - `csv` / `json`: one row per record; `file` is required.
    pub fn export(
        view: &WorkHistoryView,
        source: &dyn WorkHistorySource,
        format: ExportFormat,
        file: Option<&Path>,
        out_dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        if view.records().is_empty() {
            warning("No work records in the selected period.");
        }

        match format {
            ExportFormat::Pdf => {
                let path = match file {
                    Some(path) => {
                        let doc = view.prepare_report(source)?;
                        confirm_target(path, force)?;
                        info(format!("Exporting to PDF: {}", path.display()));
                        PdfRenderer.render(&doc)?.save(path)?;
                        path.to_path_buf()
                    }
                    None => view.download_report_with(source, &PdfRenderer, out_dir, |path| {
                        confirm_target(path, force)?;
                        info(format!("Exporting to PDF: {}", path.display()));
                        Ok(())
                    })?,
                };

                notify_export_success("PDF", &path);
                Ok(path)
            }
            ExportFormat::Csv | ExportFormat::Json => {
                let path = file.map(Path::to_path_buf).ok_or_else(|| {
                    AppError::Export(format!(
                        "--file is required for {} export",
                        format.as_str()
                    ))
                })?;

                confirm_target(&path, force)?;
                let rows = records_to_export(view.records());

                if matches!(format, ExportFormat::Csv) {
                    export_csv(&rows, &path)?;
                } else {
                    export_json(&rows, &path)?;
                }
                Ok(path)
            }
        }
    }
}

/// When a previous export is in the way and `force` is off, ask before
/// replacing it.
fn confirm_target(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("A previous export exists at '{}'.", path.display()));
    print!("Replace it with the current view? [y/N]: ");
    io::stdout().flush().ok();

    let mut reply = String::new();
    io::stdin().read_line(&mut reply)?;

    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(format!(
            "kept the existing {}, nothing exported",
            path.display()
        ))),
    }
}
