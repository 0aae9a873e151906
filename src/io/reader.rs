//! PDF reading and loading operations.
//!
//! Input files are read with `tokio::fs` and parsed on the blocking pool so
//! the runtime stays responsive while `lopdf` walks the cross-reference
//! table.
//!
//! # Examples
//!
//! ```no_run
//! use pdfswap::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> pdfswap::Result<()> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf")).await?;
//! println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::document::{PageDocument, PdfDocument};
use crate::error::{Result, SwapError};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The parsed document.
    pub document: PdfDocument,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to read and parse the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();
        let path_buf = path.to_path_buf();

        let bytes = tokio::fs::read(&path_buf)
            .await
            .map_err(|e| SwapError::FileNotAccessible {
                path: path_buf.clone(),
                source: e,
            })?;
        let file_size = bytes.len() as u64;

        let parse_path = path_buf.clone();
        let document = task::spawn_blocking(move || {
            PdfDocument::load(&bytes).map_err(|e| e.at_path(parse_path))
        })
        .await
        .map_err(|e| SwapError::other(format!("Load task failed: {e}")))??;

        Ok(LoadedPdf {
            page_count: document.page_count(),
            document,
            path: path_buf,
            load_time: start.elapsed(),
            file_size,
        })
    }
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
