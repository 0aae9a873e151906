//! pdfswap - Replace a run of pages in a PDF with the pages of another PDF.
//!
//! Given a base document, an embed document and a start page, pdfswap builds
//! a new document made of:
//!
//! - the base pages before the start page
//! - every page of the embed document
//! - the base pages after the replaced span
//!
//! The output is written next to the base document with a `_swapAAA-BBB`
//! suffix naming the replaced pages.
//!
//! # Examples
//!
//! ## End to end
//!
//! ```no_run
//! use pdfswap::config::Config;
//! use pdfswap::index::FromPage;
//!
//! # async fn example() -> pdfswap::Result<()> {
//! // Replace pages 3 onwards of report.pdf with the pages of fixed.pdf.
//! let config = Config::new("report.pdf", "fixed.pdf", FromPage::new(3));
//! let report = pdfswap::swap_pages(&config).await?;
//! println!("Created {} ({} pages)", report.output.display(), report.output_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfswap::document::PageDocument;
//! use pdfswap::index::FromPage;
//! use pdfswap::io::{PdfReader, PdfWriter};
//! use pdfswap::splice::splice;
//! use std::path::Path;
//!
//! # async fn example() -> pdfswap::Result<()> {
//! let reader = PdfReader::new();
//! let base = reader.load(Path::new("base.pdf")).await?;
//! let embed = reader.load(Path::new("embed.pdf")).await?;
//!
//! // Start at the last page of the base document.
//! let from = FromPage::new(-1).resolve(base.page_count);
//! let mut result = splice(&base.document, &embed.document, from)?;
//! let bytes = result.document.save()?;
//!
//! let path = result.plan.output_path(&base.path);
//! PdfWriter::new().write_bytes(&bytes, &path).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod io;
pub mod naming;
pub mod output;
pub mod splice;
pub mod swap;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use document::{PageDocument, PdfDocument};
pub use error::{Result, SwapError};
pub use splice::{SplicePlan, splice};
pub use swap::{SwapReport, swap_pages};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
