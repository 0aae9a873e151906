//! End-to-end swaps through the file system.

use pdfswap::config::CompressionLevel;
use pdfswap::swap::swap_pages;
use rstest::rstest;

use crate::common::{Workspace, page_tags, tags};

#[tokio::test]
async fn test_replace_middle_pages() {
    let ws = Workspace::new(10, 3);

    let report = swap_pages(&ws.config(3)).await.unwrap();

    assert_eq!(report.output, ws.path("base_swap003-005.pdf"));
    let mut expected = tags("b", 1..=2);
    expected.extend(tags("e", 1..=3));
    expected.extend(tags("b", 6..=10));
    assert_eq!(page_tags(&report.output), expected);
}

#[tokio::test]
async fn test_negative_start_replaces_last_page() {
    let ws = Workspace::new(10, 1);

    let report = swap_pages(&ws.config(-1)).await.unwrap();

    assert_eq!(report.output, ws.path("base_swap010-010.pdf"));
    let mut expected = tags("b", 1..=9);
    expected.push("e1".to_string());
    assert_eq!(page_tags(&report.output), expected);
}

#[tokio::test]
async fn test_zero_and_one_both_start_at_first_page() {
    let ws = Workspace::new(4, 2);

    let from_zero = swap_pages(&ws.config(0)).await.unwrap();
    let zero_tags = page_tags(&from_zero.output);
    let from_one = swap_pages(&ws.config(1)).await.unwrap();

    assert_eq!(from_zero.output, from_one.output);
    assert_eq!(zero_tags, ["e1", "e2", "b3", "b4"]);
}

#[tokio::test]
async fn test_whole_replacement_equals_embed() {
    let ws = Workspace::new(3, 3);

    let report = swap_pages(&ws.config(1)).await.unwrap();

    assert_eq!(page_tags(&report.output), tags("e", 1..=3));
}

#[tokio::test]
async fn test_embed_longer_than_remaining_pages() {
    let ws = Workspace::new(5, 4);

    let report = swap_pages(&ws.config(4)).await.unwrap();

    assert_eq!(report.output, ws.path("base_swap004-005.pdf"));
    let mut expected = tags("b", 1..=3);
    expected.extend(tags("e", 1..=4));
    assert_eq!(page_tags(&report.output), expected);
    assert_eq!(report.output_pages, 7);
}

#[tokio::test]
async fn test_empty_embed_keeps_base() {
    let ws = Workspace::new(4, 0);

    let report = swap_pages(&ws.config(2)).await.unwrap();

    assert_eq!(page_tags(&report.output), tags("b", 1..=4));
}

#[tokio::test]
async fn test_append_after_last_page() {
    let ws = Workspace::new(3, 2);

    let report = swap_pages(&ws.config(4)).await.unwrap();

    let mut expected = tags("b", 1..=3);
    expected.extend(tags("e", 1..=2));
    assert_eq!(page_tags(&report.output), expected);
}

#[tokio::test]
async fn test_inputs_are_unchanged() {
    let ws = Workspace::new(5, 2);
    let base_before = std::fs::read(&ws.base).unwrap();
    let embed_before = std::fs::read(&ws.embed).unwrap();

    swap_pages(&ws.config(2)).await.unwrap();

    assert_eq!(std::fs::read(&ws.base).unwrap(), base_before);
    assert_eq!(std::fs::read(&ws.embed).unwrap(), embed_before);
}

#[tokio::test]
async fn test_output_is_deterministic() {
    let ws = Workspace::new(6, 2);

    let first = swap_pages(&ws.config(2)).await.unwrap();
    let first_bytes = std::fs::read(&first.output).unwrap();
    let second = swap_pages(&ws.config(2)).await.unwrap();

    assert_eq!(std::fs::read(&second.output).unwrap(), first_bytes);
}

#[tokio::test]
async fn test_explicit_output_path() {
    let ws = Workspace::new(4, 1);
    let mut config = ws.config(2);
    config.output = Some(ws.path("custom.pdf"));

    let report = swap_pages(&config).await.unwrap();

    assert_eq!(report.output, ws.path("custom.pdf"));
    assert_eq!(ws.files(), ["base.pdf", "custom.pdf", "embed.pdf"]);
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
#[tokio::test]
async fn test_every_compression_level_keeps_order(#[case] compression: CompressionLevel) {
    let ws = Workspace::new(4, 2);
    let mut config = ws.config(2);
    config.compression = compression;

    let report = swap_pages(&config).await.unwrap();

    assert_eq!(page_tags(&report.output), ["b1", "e1", "e2", "b4"]);
}

#[tokio::test]
async fn test_copied_pages_keep_inherited_attributes() {
    let ws = Workspace::new(2, 1);

    let report = swap_pages(&ws.config(1)).await.unwrap();

    let doc = lopdf::Document::load(&report.output).unwrap();
    for page_id in doc.get_pages().into_values() {
        let page = doc.get_dictionary(page_id).unwrap();
        assert!(page.has(b"MediaBox"));
        assert!(page.has(b"Resources"));
    }
}
