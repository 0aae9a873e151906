//! Precondition checks for pdfswap.
//!
//! Both inputs are checked before either is parsed, so a missing file is
//! reported without doing any PDF work. The base document is checked first.
//! The output path is checked once the plan has named it.
//!
//! # Examples
//!
//! ```no_run
//! use pdfswap::config::Config;
//! use pdfswap::index::FromPage;
//! use pdfswap::validation::Validator;
//!
//! # async fn example() -> pdfswap::Result<()> {
//! let config = Config::new("base.pdf", "embed.pdf", FromPage::new(2));
//! Validator::new().validate_inputs(&config).await?;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::Path;

use crate::config::{Config, OverwriteMode};
use crate::error::{InputRole, Result, SwapError};

/// Validator for input and output paths.
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Check that both input files exist and are regular files.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InputNotFound`] naming the first missing input,
    /// base before embed, or [`SwapError::NotAFile`] for directories and
    /// other non-file paths.
    pub async fn validate_inputs(&self, config: &Config) -> Result<()> {
        self.validate_paths(config.base(), config.embed()).await
    }

    /// Check a base and an embed path without a [`Config`].
    ///
    /// The command line runs this before it parses `--frompage`.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate_inputs`].
    pub async fn validate_paths(&self, base: &Path, embed: &Path) -> Result<()> {
        self.validate_input(InputRole::Base, base).await?;
        self.validate_input(InputRole::Embed, embed).await
    }

    /// Check a single input file.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate_inputs`].
    async fn validate_input(&self, role: InputRole, path: &Path) -> Result<()> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| SwapError::input_not_found(role, path.to_path_buf()))?;

        if !metadata.is_file() {
            return Err(SwapError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    /// Check that the output can be written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output file exists and `--no-clobber` is set
    /// - Output directory doesn't exist
    pub async fn validate_output(&self, config: &Config, output_path: &Path) -> Result<()> {
        let exists = tokio::fs::metadata(output_path).await.is_ok();
        if exists && config.overwrite_mode == OverwriteMode::NoClobber {
            return Err(SwapError::output_exists(output_path.to_path_buf()));
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let is_dir = tokio::fs::metadata(parent)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);

            if !is_dir {
                return Err(SwapError::FailedToCreateOutput {
                    path: output_path.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("output directory does not exist: {}", parent.display()),
                    ),
                });
            }
        }

        Ok(())
    }
}
