//! CSV export sink
//!
//! Writes one CSV file per category into the data directory and, per
//! record, attempts a cover download into the image store.

use crate::export::images::download_cover;
use crate::export::{ExportError, ExportResult, ExportSink};
use crate::record::{Product, CSV_COLUMNS};
use crate::scrape::Pacer;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// The CSV-plus-images export sink
#[derive(Debug)]
pub struct CsvExporter {
    data_dir: PathBuf,
    images_dir: PathBuf,
    client: Client,
    pacer: Pacer,
}

impl CsvExporter {
    /// Creates an exporter writing into the given directories
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Receives one `{destination}.csv` per export call
    /// * `images_dir` - Receives downloaded cover images
    /// * `client` - HTTP client for cover downloads
    /// * `pacer` - Pacing applied before each cover download
    pub fn new(
        data_dir: impl Into<PathBuf>,
        images_dir: impl Into<PathBuf>,
        client: Client,
        pacer: Pacer,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            images_dir: images_dir.into(),
            client,
            pacer,
        }
    }

    fn open_writer(&self, path: &Path) -> ExportResult<csv::Writer<std::fs::File>> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| ExportError::Destination {
            path: self.data_dir.display().to_string(),
            message: e.to_string(),
        })?;

        csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| ExportError::Destination {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

impl ExportSink for CsvExporter {
    /// Writes the records as CSV rows and downloads their covers
    ///
    /// The header row is written first, then one row per record in the
    /// given order, so identical input records produce byte-identical
    /// files. Cover download failures are logged and do not affect the
    /// result; only an unopenable destination is an error.
    async fn export(&self, records: &[Product], destination: &str) -> ExportResult<()> {
        let path = self.data_dir.join(format!("{}.csv", destination));
        let mut writer = self.open_writer(&path)?;

        writer.write_record(CSV_COLUMNS)?;

        for record in records {
            writer.serialize(record)?;
            download_cover(
                &self.client,
                &self.pacer,
                &self.images_dir,
                &record.title,
                &record.image_url,
            )
            .await;
        }

        writer.flush().map_err(ExportError::Io)?;
        Ok(())
    }
}
