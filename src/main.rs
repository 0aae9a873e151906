//! pdfswap - Replace a run of pages in a PDF with the pages of another PDF.

use clap::Parser;
use std::process;

use pdfswap::cli::Cli;
use pdfswap::error::SwapError;
use pdfswap::output::{OutputFormatter, display_report};
use pdfswap::swap::swap_pages;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    if let Err(err) = run(cli).await {
        report_error(&err);
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), SwapError> {
    let config = cli.to_checked_config().await?;
    let formatter = OutputFormatter::from_config(&config);

    log::debug!("{} v{}", pdfswap::NAME, pdfswap::VERSION);

    let report = swap_pages(&config).await?;

    if config.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| SwapError::serialization(e.to_string()))?;
        println!("{json}");
    } else {
        display_report(&formatter, &report);
    }

    Ok(())
}

fn report_error(err: &SwapError) {
    match err {
        // Missing inputs print the bare message on stdout.
        SwapError::InputNotFound { .. } => println!("{err}"),
        _ => OutputFormatter::default().error(&format!("Error: {err}")),
    }
}
