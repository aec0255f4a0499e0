// File: crates/rates-core/src/lib.rs
// Summary: Library entry point; re-exports the dataset model, filters, encoders, and chart export API.

pub mod catalog;
pub mod dates;
pub mod encode;
pub mod error;
pub mod filter;
pub mod model;
pub mod payload;
pub mod pdf;
pub mod raster;

pub use encode::{export_data, export_data_at, DataFormat, ExportMetadata, RangeStamp};
pub use error::{ExportError, Result};
pub use filter::{filter_by_range, filter_data, project_currencies};
pub use model::{DailyRates, DateRange, ExchangeRates, RateEntry};
pub use payload::{chart_filename, content_type, data_filename, Payload};
pub use raster::{Bitmap, ChartExporter, ChartFormat, ChartSurface, RasterOptions, WHITE};
