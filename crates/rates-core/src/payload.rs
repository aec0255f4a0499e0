// File: crates/rates-core/src/payload.rs
// Summary: Export payloads, content types, filename templates, and local delivery.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{ExportError, Result};
use crate::model::DateRange;

/// MIME strings attached to delivered payloads.
///
/// `EXCEL` intentionally declares the spreadsheet type for what is really
/// BOM-prefixed CSV; spreadsheet applications open it in place. See
/// [`crate::encode::DataFormat::Excel`].
pub mod content_type {
    pub const CSV: &str = "text/csv;charset=utf-8;";
    pub const EXCEL: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;charset=utf-8;";
    pub const JSON: &str = "application/json;charset=utf-8;";
    pub const XML: &str = "application/xml;charset=utf-8;";
    pub const PNG: &str = "image/png";
    pub const SVG: &str = "image/svg+xml";
    pub const PDF: &str = "application/pdf";
}

/// A finished export: bytes plus the name and type to deliver them under.
#[derive(Clone, Debug)]
pub struct Payload {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Payload {
    pub fn new(filename: String, content_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    /// Write the payload into `dir` under its filename, creating the
    /// directory if needed. Single attempt; the caller retries if it wants
    /// to.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

/// `rial-exchange-rates-{start}-to-{end}.{ext}`, dates in ISO form.
pub fn data_filename(range: &DateRange, extension: &str) -> String {
    format!(
        "rial-exchange-rates-{}-to-{}.{}",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d"),
        extension
    )
}

/// `rial-exchange-chart-{yyyy-MM-dd-HHmm}.{ext}`, minute resolution.
///
/// Repeated exports within one minute produce the same name and overwrite
/// on delivery.
pub fn chart_filename(at: DateTime<Local>, extension: &str) -> String {
    format!(
        "rial-exchange-chart-{}.{}",
        at.format("%Y-%m-%d-%H%M"),
        extension
    )
}
