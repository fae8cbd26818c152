// ABOUTME: Summary of a bundle's contents for the inspect command
// ABOUTME: Provides text and JSON formatters over a sorted summary

use anyhow::Result;
use mdocx_sdk::{Document, HeaderInfo};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderInfo>,
    pub metadata_keys: Vec<String>,
    pub markdown_files: Vec<String>,
    pub media_ids: Vec<String>,
    pub media_paths: Vec<String>,
}

impl InspectSummary {
    pub fn new(document: &Document, header: Option<HeaderInfo>) -> Self {
        let mut metadata_keys: Vec<String> = document
            .metadata
            .iter()
            .flat_map(|map| map.keys().cloned())
            .collect();
        let mut markdown_files: Vec<String> = document
            .markdown_files
            .iter()
            .map(|file| file.path.clone())
            .collect();
        let mut media_ids: Vec<String> =
            document.media_items.iter().map(|item| item.id.clone()).collect();
        let mut media_paths: Vec<String> = document
            .media_items
            .iter()
            .filter(|item| !item.path.is_empty())
            .map(|item| item.path.clone())
            .collect();

        metadata_keys.sort();
        markdown_files.sort();
        media_ids.sort();
        media_paths.sort();

        Self {
            header,
            metadata_keys,
            markdown_files,
            media_ids,
            media_paths,
        }
    }
}

pub trait SummaryFormat {
    fn format_summary(&self, summary: &InspectSummary) -> Result<String>;
}

pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn label(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

impl SummaryFormat for TextFormatter {
    fn format_summary(&self, summary: &InspectSummary) -> Result<String> {
        let mut lines = vec![
            format!(
                "{} {}",
                self.label("Metadata keys:"),
                bracketed(&summary.metadata_keys)
            ),
            format!(
                "{} {}",
                self.label(&format!("Markdown files ({}):", summary.markdown_files.len())),
                bracketed(&summary.markdown_files)
            ),
            format!(
                "{} {}",
                self.label(&format!("Media IDs ({}):", summary.media_ids.len())),
                bracketed(&summary.media_ids)
            ),
        ];

        if !summary.media_paths.is_empty() {
            lines.push(format!(
                "{} {}",
                self.label("Media paths:"),
                bracketed(&summary.media_paths)
            ));
        }

        if let Some(header) = &summary.header {
            lines.push(format!(
                "{} version={} flags=0x{:04x} metadata_len={}",
                self.label("Header:"),
                header.version,
                header.header_flags,
                header.metadata_length
            ));
        }

        Ok(lines.join("\n"))
    }
}

pub struct JsonFormatter;

impl SummaryFormat for JsonFormatter {
    fn format_summary(&self, summary: &InspectSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}
