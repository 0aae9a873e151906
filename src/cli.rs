//! CLI argument parsing for pdfswap.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfswap::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Swapping pages of {}", cli.path);
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{CompressionLevel, Config, OverwriteMode};
use crate::error::{Result, SwapError};
use crate::index::FromPage;
use crate::validation::Validator;

/// Replace a run of pages in a PDF with the pages of another PDF.
///
/// The pages of the embed document replace as many pages of the base
/// document, starting at --frompage. The result is written next to the base
/// document with a `_swapAAA-BBB` suffix naming the replaced pages.
#[derive(Parser, Debug)]
#[command(name = "pdfswap")]
#[command(version)]
#[command(about = "Replace a run of pages in a PDF with the pages of another PDF", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Base PDF whose pages are replaced
    #[arg(long, value_name = "FILE", default_value = "")]
    pub path: String,

    /// PDF whose pages are inserted
    ///
    /// Every page of this document is inserted, replacing the same number
    /// of pages in the base document.
    #[arg(long, value_name = "FILE", default_value = "")]
    pub embed: String,

    /// First page to replace
    ///
    /// Positive numbers are 1-based page numbers. Negative numbers count
    /// from the end: -1 is the last page. 0 is the first page.
    ///
    /// Examples:
    ///   --frompage 3     # replace starting at page 3
    ///   --frompage -2    # replace starting at the second to last page
    #[arg(long, value_name = "PAGE", default_value = "0", allow_hyphen_values = true)]
    pub frompage: String,

    /// Output PDF file path
    ///
    /// Overrides the derived `<name>_swapAAA-BBB.<ext>` path.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dry run - load both inputs and show the plan without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show page counts, ranges and timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never overwrite an existing output file
    #[arg(long)]
    pub no_clobber: bool,

    /// Compression level for output PDF
    ///
    /// - none: Leave streams as they are
    /// - standard: Compress streams (default)
    /// - maximum: Compress streams and drop unreferenced objects
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Print a JSON report of the swap on success
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,
}

impl Cli {
    /// Check both input paths, then build the Config.
    ///
    /// A missing input is reported before `--frompage` is looked at, so
    /// `--frompage abc` with a missing base still says the base is missing.
    ///
    /// # Errors
    ///
    /// Returns the first failing input check, then anything
    /// [`Cli::to_config`] rejects.
    pub async fn to_checked_config(&self) -> Result<Config> {
        Validator::new()
            .validate_paths(Path::new(&self.path), Path::new(&self.embed))
            .await?;
        self.to_config()
    }

    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The start page is not a whole number
    /// - Compression level is invalid
    /// - Configuration validation fails
    pub fn to_config(&self) -> Result<Config> {
        let from_page = FromPage::from_str(&self.frompage)?;

        let compression = CompressionLevel::from_str(&self.compression)?;

        let overwrite_mode = if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        };

        let config = Config {
            base: PathBuf::from(&self.path),
            embed: PathBuf::from(&self.embed),
            from_page,
            output: self.output.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            json: self.json,
            overwrite_mode,
            compression,
        };

        config
            .validate()
            .map_err(|e| SwapError::invalid_config(e.to_string()))?;

        Ok(config)
    }
}
