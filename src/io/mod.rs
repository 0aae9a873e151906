//! File I/O for PDF documents.
//!
//! - [`reader`]: loading input documents from disk
//! - [`writer`]: atomically writing the output document

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader, format_file_size};
pub use writer::{PdfWriter, WriteStatistics};
