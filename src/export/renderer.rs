//! Report rendering contract.

use crate::core::ReportDocument;
use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Turns a [`ReportDocument`] into a file format.
pub trait ReportRenderer {
    fn render(&self, doc: &ReportDocument) -> AppResult<RenderedReport>;
}

/// Rendered bytes, ready to be saved.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    bytes: Vec<u8>,
}

impl RenderedReport {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write to an explicit path.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Save as `file_name` inside `dir` and return the full path.
    pub fn download(&self, dir: &Path, file_name: &str) -> AppResult<PathBuf> {
        let path = dir.join(file_name);
        self.save(&path)?;
        Ok(path)
    }
}
