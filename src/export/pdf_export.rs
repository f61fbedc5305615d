// src/export/pdf_export.rs

use crate::core::ReportDocument;
use crate::errors::AppResult;
use crate::export::pdf::PdfManager;
use crate::export::renderer::{RenderedReport, ReportRenderer};

/// Renders reports as PDF through [`PdfManager`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl ReportRenderer for PdfRenderer {
    fn render(&self, doc: &ReportDocument) -> AppResult<RenderedReport> {
        let mut pdf = PdfManager::new();
        pdf.write_document(doc);
        Ok(RenderedReport::new(pdf.finish()))
    }
}
