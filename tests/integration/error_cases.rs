//! Integration tests for error handling and edge cases.

use pdfswap::config::OverwriteMode;
use pdfswap::error::{InputRole, SwapError};
use pdfswap::swap::swap_pages;

use crate::common::Workspace;

#[tokio::test]
async fn test_missing_base() {
    let ws = Workspace::new(2, 1);
    let mut config = ws.config(1);
    config.base = ws.path("missing.pdf");

    let err = swap_pages(&config).await.unwrap_err();

    assert!(matches!(
        err,
        SwapError::InputNotFound {
            role: InputRole::Base,
            ..
        }
    ));
    assert_eq!(err.to_string(), "target path not found!");
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_missing_embed() {
    let ws = Workspace::new(2, 1);
    let mut config = ws.config(1);
    config.embed = ws.path("missing.pdf");

    let err = swap_pages(&config).await.unwrap_err();

    assert_eq!(err.to_string(), "embed path not found!");
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_both_missing_reports_base() {
    let ws = Workspace::new(1, 1);
    let mut config = ws.config(1);
    config.base = ws.path("nope-a.pdf");
    config.embed = ws.path("nope-b.pdf");

    let err = swap_pages(&config).await.unwrap_err();

    assert_eq!(err.to_string(), "target path not found!");
}

#[tokio::test]
async fn test_corrupted_embed() {
    let ws = Workspace::new(3, 1);
    std::fs::write(&ws.embed, b"not a pdf at all").unwrap();

    let err = swap_pages(&ws.config(1)).await.unwrap_err();

    match &err {
        SwapError::DocumentParse { path, .. } => assert_eq!(path, &ws.embed),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 3);
    assert_eq!(ws.files(), ["base.pdf", "embed.pdf"]);
}

#[tokio::test]
async fn test_start_before_first_page() {
    let ws = Workspace::new(3, 1);

    let err = swap_pages(&ws.config(-4)).await.unwrap_err();

    assert!(matches!(
        err,
        SwapError::IndexOutOfRange {
            index: -1,
            base_count: 3
        }
    ));
    assert_eq!(ws.files(), ["base.pdf", "embed.pdf"]);
}

#[tokio::test]
async fn test_start_past_end() {
    let ws = Workspace::new(3, 1);

    let err = swap_pages(&ws.config(5)).await.unwrap_err();

    assert!(matches!(err, SwapError::IndexOutOfRange { index: 4, .. }));
    assert_eq!(ws.files(), ["base.pdf", "embed.pdf"]);
}

#[tokio::test]
async fn test_no_clobber_keeps_existing_output() {
    let ws = Workspace::new(3, 1);
    let existing = ws.path("base_swap002-002.pdf");
    std::fs::write(&existing, b"keep me").unwrap();

    let mut config = ws.config(2);
    config.overwrite_mode = OverwriteMode::NoClobber;
    let err = swap_pages(&config).await.unwrap_err();

    assert!(matches!(err, SwapError::OutputExists { .. }));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(std::fs::read(&existing).unwrap(), b"keep me");
}

#[tokio::test]
async fn test_overwrite_by_default() {
    let ws = Workspace::new(3, 1);
    let existing = ws.path("base_swap002-002.pdf");
    std::fs::write(&existing, b"stale").unwrap();

    swap_pages(&ws.config(2)).await.unwrap();

    assert_ne!(std::fs::read(&existing).unwrap(), b"stale");
}

#[tokio::test]
async fn test_output_into_missing_directory() {
    let ws = Workspace::new(3, 1);
    let mut config = ws.config(2);
    config.output = Some(ws.path("missing").join("out.pdf"));

    let err = swap_pages(&config).await.unwrap_err();

    assert!(matches!(err, SwapError::FailedToCreateOutput { .. }));
    assert_eq!(ws.files(), ["base.pdf", "embed.pdf"]);
}

#[tokio::test]
async fn test_verbose_and_quiet_rejected() {
    let ws = Workspace::new(2, 1);
    let mut config = ws.config(1);
    config.verbose = true;

    let err = swap_pages(&config).await.unwrap_err();

    assert!(matches!(err, SwapError::InvalidConfig { .. }));
}
