//! Error types for pdfswap.
//!
//! Every failure the swap pipeline can hit is a [`SwapError`]. Errors carry
//! enough context (paths, indices, page counts) to print an actionable
//! one-line diagnostic and map to a stable process exit code.
//!
//! # Error Categories
//!
//! - **Input Errors**: missing or unreadable input files
//! - **Document Errors**: malformed or encrypted PDFs
//! - **Index Errors**: unparsable or out-of-range `--frompage` values
//! - **Output Errors**: serialization and write failures

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfswap operations.
pub type Result<T> = std::result::Result<T, SwapError>;

/// Which input a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The document whose pages are replaced (`--path`).
    Base,
    /// The document inserted into the base (`--embed`).
    Embed,
}

impl InputRole {
    /// Name of the input as the command line refers to it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "target",
            Self::Embed => "embed",
        }
    }
}

/// Main error type for pdfswap operations.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// An input file does not exist.
    #[error("{} path not found!", .role.label())]
    InputNotFound {
        /// Which input is missing.
        role: InputRole,
        /// Path that was given.
        path: PathBuf,
    },

    /// An input path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// An input file could not be read.
    #[error("Cannot access file: {}\n  Reason: {source}", .path.display())]
    FileNotAccessible {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An input is not a structurally valid PDF.
    #[error("Failed to parse PDF: {}\n  Reason: {reason}", .path.display())]
    DocumentParse {
        /// Path of the document (or `<memory>` for byte sources).
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// An input PDF is encrypted.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path of the encrypted document.
        path: PathBuf,
    },

    /// `--frompage` is not an integer.
    #[error("Invalid page index '{input}': {reason}")]
    InvalidPageIndex {
        /// Raw user input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The resolved start index falls outside the base document.
    #[error(
        "Page index {index} is out of range for a document with {base_count} page(s)\n  \
         Start pages must be between 1 and {}, or -1 to -{base_count} counting from the end",
        .base_count + 1
    )]
    IndexOutOfRange {
        /// Effective zero-based index after end-relative resolution.
        index: i64,
        /// Page count of the base document.
        base_count: usize,
    },

    /// The assembled document could not be encoded.
    #[error("Failed to serialize output document: {reason}")]
    Serialization {
        /// Encoder diagnostic.
        reason: String,
    },

    /// The output file exists and overwriting was disabled.
    #[error(
        "Output file already exists: {}\n  \
         Remove it, drop --no-clobber, or choose a path with --output",
        .path.display()
    )]
    OutputExists {
        /// Existing output path.
        path: PathBuf,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or finalising the output file failed.
    #[error("Failed to write output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong.
        message: String,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl SwapError {
    /// Create an InputNotFound error.
    pub fn input_not_found(role: InputRole, path: PathBuf) -> Self {
        Self::InputNotFound { role, path }
    }

    /// Create a DocumentParse error.
    pub fn document_parse(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::DocumentParse {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an InvalidPageIndex error.
    pub fn invalid_page_index(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPageIndex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(index: i64, base_count: usize) -> Self {
        Self::IndexOutOfRange { index, base_count }
    }

    /// Create a Serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Attach a file path to document errors raised from in-memory bytes.
    ///
    /// Other variants are returned unchanged.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::DocumentParse { reason, .. } => Self::DocumentParse {
                path: path.into(),
                reason,
            },
            Self::EncryptedPdf { .. } => Self::EncryptedPdf { path: path.into() },
            other => other,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 1,
            Self::NotAFile { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::DocumentParse { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::InvalidPageIndex { .. } => 1,
            Self::IndexOutOfRange { .. } => 1,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Serialization { .. } => 6,
            Self::InvalidConfig { .. } => 1,
            Self::Other { .. } => 1,
        }
    }
}
