//! Dry runs plan the swap without writing anything.

use pdfswap::swap::swap_pages;

use crate::common::Workspace;

#[tokio::test]
async fn test_dry_run_reports_plan() {
    let ws = Workspace::new(10, 3);
    let mut config = ws.config(3);
    config.dry_run = true;

    let report = swap_pages(&config).await.unwrap();

    assert!(report.dry_run);
    assert_eq!(report.output, ws.path("base_swap003-005.pdf"));
    assert_eq!(report.first_page, 3);
    assert_eq!(report.last_page, 5);
    assert_eq!(report.output_pages, 10);
    assert_eq!(report.bytes_written, None);
}

#[tokio::test]
async fn test_dry_run_creates_no_files() {
    let ws = Workspace::new(4, 1);
    let mut config = ws.config(-1);
    config.dry_run = true;

    swap_pages(&config).await.unwrap();

    assert_eq!(ws.files(), ["base.pdf", "embed.pdf"]);
}

#[tokio::test]
async fn test_dry_run_still_checks_range() {
    let ws = Workspace::new(4, 1);
    let mut config = ws.config(-5);
    config.dry_run = true;

    assert!(swap_pages(&config).await.is_err());
}

#[tokio::test]
async fn test_dry_run_report_serializes() {
    let ws = Workspace::new(4, 2);
    let mut config = ws.config(2);
    config.dry_run = true;

    let report = swap_pages(&config).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["dryRun"], true);
    assert_eq!(json["fromPage"], 2);
    assert_eq!(json["plan"]["effectiveFrom"], 1);
    assert!(json["bytesWritten"].is_null());
}
