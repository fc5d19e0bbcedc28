//! Export module: turning product records into persisted artifacts
//!
//! The scrape pipeline hands each category's records to an [`ExportSink`].
//! The provided sink, [`CsvExporter`], writes one CSV file per category
//! (header row first, rows in record order) and downloads each record's
//! cover image into an image store keyed by a slug of the title.

mod csv_file;
mod images;

pub use csv_file::CsvExporter;
pub use images::{download_cover, image_extension, slugify_title};

use crate::record::Product;
use thiserror::Error;

/// Errors that can occur during export operations
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot open export destination {path}: {message}")]
    Destination { path: String, message: String },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Trait for export sinks
///
/// A sink consumes one category's records at a time, in order. An error
/// fails that category's export only; the driver carries on with the
/// remaining categories.
#[allow(async_fn_in_trait)]
pub trait ExportSink {
    /// Persists the records under the given destination name
    async fn export(&self, records: &[Product], destination: &str) -> ExportResult<()>;
}
