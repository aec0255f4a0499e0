// File: crates/rates-core/src/error.rs
// Summary: Error taxonomy for the export pipeline.

use thiserror::Error;

/// Errors surfaced by export operations.
///
/// Date keys that fail to parse are not represented here: they are
/// recovered locally (warn and skip) and never abort an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The chart surface failed to produce pixels.
    #[error("chart rasterization failed")]
    Raster(#[source] anyhow::Error),

    /// SVG export reads the surface's existing raster and none is available.
    #[error("canvas not found")]
    CanvasNotFound,

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("CSV encoding failed: {0}")]
    Csv(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExportError>;
