//! End-to-end page swap.
//!
//! [`swap_pages`] runs the whole pipeline for one invocation: check inputs,
//! load base then embed, plan and splice, serialize, and write the result.
//! Steps run one after another; nothing is written until serialization has
//! succeeded.

use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task;

use crate::config::Config;
use crate::document::PageDocument;
use crate::error::{Result, SwapError};
use crate::io::{PdfReader, PdfWriter, format_file_size};
use crate::splice::{SplicePlan, splice};
use crate::validation::Validator;

/// Outcome of a swap, suitable for display or JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapReport {
    /// Base document path.
    pub base: PathBuf,

    /// Embed document path.
    pub embed: PathBuf,

    /// Output path, written unless this was a dry run.
    pub output: PathBuf,

    /// Start page as given on the command line.
    pub from_page: i64,

    /// Resolved page ranges.
    pub plan: SplicePlan,

    /// 1-based number of the first replaced page.
    pub first_page: usize,

    /// 1-based number of the last replaced page.
    pub last_page: usize,

    /// Pages in the output document.
    pub output_pages: usize,

    /// Size of the written file. `None` for dry runs.
    pub bytes_written: Option<u64>,

    /// Whether writing was skipped.
    pub dry_run: bool,

    /// Wall time for the whole pipeline.
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Replace pages of `config.base` with every page of `config.embed`.
///
/// # Errors
///
/// Returns the first failure of the pipeline. No output file exists
/// afterwards unless the call succeeded.
///
/// # Examples
///
/// ```no_run
/// use pdfswap::config::Config;
/// use pdfswap::index::FromPage;
/// use pdfswap::swap::swap_pages;
///
/// # async fn example() -> pdfswap::Result<()> {
/// let config = Config::new("report.pdf", "fixed.pdf", FromPage::new(3));
/// let report = swap_pages(&config).await?;
/// println!("Wrote {}", report.output.display());
/// # Ok(())
/// # }
/// ```
pub async fn swap_pages(config: &Config) -> Result<SwapReport> {
    let start = Instant::now();

    config
        .validate()
        .map_err(|e| SwapError::invalid_config(e.to_string()))?;

    Validator::new().validate_inputs(config).await?;

    let reader = PdfReader::new();
    let base = reader.load(config.base()).await?;
    let embed = reader.load(config.embed()).await?;

    for loaded in [&base, &embed] {
        log::debug!(
            "Loaded {} ({}) in {:?}",
            loaded.path.display(),
            format_file_size(loaded.file_size),
            loaded.load_time
        );
    }

    log::info!(
        "Replacing pages of {} ({} page(s)) with {} ({} page(s)) from page {}",
        base.path.display(),
        base.page_count,
        embed.path.display(),
        embed.page_count,
        config.from_page
    );

    let effective_from = config.from_page.resolve(base.page_count);
    let (base_doc, embed_doc) = (base.document, embed.document);
    let result = task::spawn_blocking(move || splice(&base_doc, &embed_doc, effective_from))
        .await
        .map_err(|e| SwapError::other(format!("Splice task failed: {e}")))??;

    let plan = result.plan;
    let output = config.output_path(&plan);
    log::debug!(
        "Assembled {} page(s), {} base page(s) replaced, in {:?}",
        result.statistics.total_pages(),
        result.statistics.replaced_pages,
        result.statistics.splice_time
    );

    let mut report = SwapReport {
        base: config.base.clone(),
        embed: config.embed.clone(),
        output,
        from_page: config.from_page.get(),
        plan,
        first_page: plan.first_page(),
        last_page: plan.last_page(),
        output_pages: plan.output_page_count(),
        bytes_written: None,
        dry_run: config.dry_run,
        elapsed: Duration::ZERO,
    };

    if config.dry_run {
        log::info!("Dry run, not writing {}", report.output.display());
        report.elapsed = start.elapsed();
        return Ok(report);
    }

    Validator::new()
        .validate_output(config, &report.output)
        .await?;

    let mut document = result.document.with_compression(config.compression);
    let bytes = task::spawn_blocking(move || document.save())
        .await
        .map_err(|e| SwapError::other(format!("Serialize task failed: {e}")))??;

    let stats = PdfWriter::new().write_bytes(&bytes, &report.output).await?;
    log::debug!(
        "Wrote {} ({}) in {:?}",
        report.output.display(),
        format_file_size(stats.file_size),
        stats.write_time
    );

    report.bytes_written = Some(stats.file_size);
    report.elapsed = start.elapsed();
    Ok(report)
}
