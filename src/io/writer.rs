//! PDF writing and saving operations.
//!
//! This module writes serialized documents to disk with:
//! - Atomic writes (write to temp file, then rename)
//! - Cleanup of partial files on failure
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pdfswap::io::writer::PdfWriter;
//! use std::path::Path;
//!
//! # async fn example(bytes: Vec<u8>) -> pdfswap::Result<()> {
//! let writer = PdfWriter::new();
//! let stats = writer.write_bytes(&bytes, Path::new("output.pdf")).await?;
//! println!("Wrote {} byte(s) in {:?}", stats.file_size, stats.write_time);
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{Result, SwapError};

const TEMP_SUFFIX: &str = ".pdfswap-tmp";

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,
}

/// Writer for serialized PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `bytes` to `path`, replacing any existing file.
    ///
    /// The bytes go to a sibling temp file that is renamed over `path` once
    /// complete, so readers never see a partial document. The temp file is
    /// removed if any step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Disk full
    pub async fn write_bytes(&self, bytes: &[u8], path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let temp_path = temp_path_for(path);
        if let Err(e) = write_then_rename(bytes, &temp_path, path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e);
        }

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size: bytes.len() as u64,
        })
    }
}

async fn write_then_rename(bytes: &[u8], temp_path: &Path, path: &Path) -> Result<()> {
    tokio::fs::write(temp_path, bytes)
        .await
        .map_err(|e| SwapError::FailedToCreateOutput {
            path: temp_path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(temp_path, path)
        .await
        .map_err(|e| SwapError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Sibling temp file used while writing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}
