// ABOUTME: Tests for bundle validation over directories and container files
// ABOUTME: Covers header field checks, duplicate detection, and load failures

use mdocx_cli::opener::BundleOpener;
use mdocx_cli::validate::ValidationReport;
use mdocx_sdk::constants::header::MAGIC;
use mdocx_sdk::{DecodeOptions, Document, MarkdownFile, MediaItem};
use std::io::Read;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_container(dir: &TempDir, version: u16, reserved: u8) -> PathBuf {
    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&version.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&32u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&[reserved; 12]);
    let path = dir.path().join("bundle.mdocx");
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_valid_unpacked_bundle() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.md"), "# Readme").unwrap();
    std::fs::write(dir.path().join("logo.png"), b"fake").unwrap();

    let report =
        ValidationReport::for_path(&BundleOpener::new(), dir.path(), &DecodeOptions::default());
    assert!(report.valid);
    assert_eq!(report.markdown_file_count, 1);
    assert_eq!(report.media_item_count, 1);
    assert_eq!(
        report.to_text(false),
        "Valid MDOCX: markdown=1 (8 B) media=1 (4 B)"
    );
    assert!(report.failure().is_none());
}

#[test]
fn test_container_without_decoder_reports_header_and_error() {
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, 2, 0xaa);

    let report =
        ValidationReport::for_path(&BundleOpener::new(), &path, &DecodeOptions::default());
    assert!(!report.valid);
    assert_eq!(
        report.warnings,
        vec![
            "header version is 2, expected 1",
            "reserved header bytes are not zero",
        ]
    );
    assert!(report.error.as_deref().unwrap().contains("No decoder available"));
    assert!(report.failure().unwrap().starts_with("validation failed: No decoder"));

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 2);
}

#[test]
fn test_container_with_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, 1, 0);

    let decoder = |_: &mut dyn Read, _: &DecodeOptions| -> mdocx_sdk::Result<Document> {
        let file = MarkdownFile {
            path: "index.md".to_string(),
            content: b"hello".to_vec(),
        };
        let item = MediaItem {
            id: "chart".to_string(),
            path: "chart.png".to_string(),
            mime_type: "image/png".to_string(),
            data: vec![0; 2048],
        };
        Ok(Document {
            metadata: None,
            markdown_files: vec![file.clone(), file],
            media_items: vec![item.clone(), item],
        })
    };

    let report = ValidationReport::for_path(
        &BundleOpener::with_decoder(Box::new(decoder)),
        &path,
        &DecodeOptions::default(),
    );
    assert!(!report.valid);
    assert_eq!(report.total_media_bytes, 4096);
    insta::assert_snapshot!(report.to_text(false), @r###"
    WARNING: duplicate markdown path: "index.md"
    WARNING: duplicate media ID: "chart"
    "###);
    assert_eq!(
        report.failure().as_deref(),
        Some("validation failed: markdown=2 media=2")
    );
}

#[test]
fn test_clean_container_with_decoder() {
    let dir = TempDir::new().unwrap();
    let path = write_container(&dir, 1, 0);

    let decoder = |_: &mut dyn Read, options: &DecodeOptions| -> mdocx_sdk::Result<Document> {
        assert!(!options.strict);
        Ok(Document::default())
    };

    let report = ValidationReport::for_path(
        &BundleOpener::with_decoder(Box::new(decoder)),
        &path,
        &DecodeOptions { strict: false },
    );
    assert!(report.valid, "warnings: {:?}", report.warnings);
    assert_eq!(report.to_text(false), "Valid MDOCX: markdown=0 (0 B) media=0 (0 B)");
}

#[test]
fn test_short_file_reports_header_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.mdocx");
    std::fs::write(&path, b"MDOCX").unwrap();

    let report =
        ValidationReport::for_path(&BundleOpener::new(), &path, &DecodeOptions::default());
    assert!(!report.valid);
    assert_eq!(
        report.warnings,
        vec!["header read error: Header too short: expected 32 bytes, found 5"]
    );
    assert!(report.error.is_some());
}
