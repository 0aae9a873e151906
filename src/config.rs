//! Configuration module for pdfswap.
//!
//! This module holds the validated, normalized settings that drive a swap.
//! It handles:
//! - Validation of argument combinations
//! - Resolution of the output path
//! - Application of defaults

use anyhow::{Result, bail};

use crate::SwapError;
use crate::index::FromPage;
use crate::splice::SplicePlan;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Compression level for the output PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - streams are written as they are.
    None,
    /// Compress streams.
    #[default]
    Standard,
    /// Compress streams and drop unreferenced objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = SwapError;

    /// Parse compression level from string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not "none", "standard", or "maximum".
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(SwapError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Replace an existing output file (default).
    #[default]
    Overwrite,
    /// Never overwrite, error if the file exists.
    NoClobber,
}

/// Complete configuration for a swap.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document whose pages are replaced.
    pub base: PathBuf,

    /// Document inserted into the base.
    pub embed: PathBuf,

    /// First page to replace, as typed by the user.
    pub from_page: FromPage,

    /// Explicit output path. Derived from the base path when `None`.
    pub output: Option<PathBuf>,

    /// Dry run mode - plan without writing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Print the final report as JSON.
    pub json: bool,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Compression level for output.
    pub compression: CompressionLevel,
}

impl Config {
    /// Create a configuration with defaults for everything but the inputs.
    pub fn new(base: impl Into<PathBuf>, embed: impl Into<PathBuf>, from_page: FromPage) -> Self {
        Self {
            base: base.into(),
            embed: embed.into(),
            from_page,
            output: None,
            dry_run: false,
            verbose: false,
            quiet: false,
            json: false,
            overwrite_mode: OverwriteMode::default(),
            compression: CompressionLevel::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - An explicit output path names one of the inputs
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if let Some(output) = &self.output {
            for input in [&self.base, &self.embed] {
                if input == output {
                    bail!(
                        "Output file cannot be the same as an input file: {}",
                        output.display()
                    );
                }
            }
        }

        Ok(())
    }

    /// Output path for a planned swap.
    ///
    /// Uses the explicit `--output` path when set, otherwise tags the base
    /// file name with the replaced range.
    pub fn output_path(&self, plan: &SplicePlan) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => plan.output_path(&self.base),
        }
    }

    /// Base document path.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Embed document path.
    pub fn embed(&self) -> &Path {
        &self.embed
    }

    /// Check if output should be displayed.
    ///
    /// Returns false if in quiet mode and not doing a dry run.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
