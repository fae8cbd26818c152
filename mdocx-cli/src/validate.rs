// ABOUTME: Structural checks for a bundle: fixed header fields and unique paths and IDs
// ABOUTME: Produces a report with counts and sizes, printed as text or JSON

use crate::opener::BundleOpener;
use anyhow::Result;
use mdocx_sdk::constants::header::{FIXED_HEADER_SIZE, SUPPORTED_VERSION};
use mdocx_sdk::{read_header_info, BundleError, DecodeOptions, Document, HeaderInfo};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub markdown_file_count: usize,
    pub media_item_count: usize,
    pub total_markdown_bytes: usize,
    pub total_media_bytes: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Set when the bundle could not be loaded at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    /// Validate the bundle at `path`; load failures are recorded, not returned
    pub fn for_path(opener: &BundleOpener, path: &Path, options: &DecodeOptions) -> Self {
        let mut warnings = Vec::new();
        if !path.is_dir() {
            match read_header_info(path) {
                Ok(header) => warnings.extend(header_warnings(&header)),
                Err(e) => warnings.push(format!("header read error: {}", e)),
            }
        }

        match opener.load(path, options) {
            Ok(opened) => {
                let mut report = Self::for_document(&opened.document);
                warnings.append(&mut report.warnings);
                report.warnings = warnings;
                report.valid = report.warnings.is_empty();
                report
            }
            Err(e) => {
                log::debug!("Failed to load {} for validation: {}", path.display(), e);
                Self {
                    valid: false,
                    warnings,
                    error: Some(e.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    /// Counts, sizes, and duplicate checks for a loaded document
    pub fn for_document(document: &Document) -> Self {
        let warnings: Vec<String> = document.problems().iter().map(problem_warning).collect();

        Self {
            valid: warnings.is_empty(),
            markdown_file_count: document.markdown_files.len(),
            media_item_count: document.media_items.len(),
            total_markdown_bytes: document.markdown_files.iter().map(|f| f.content.len()).sum(),
            total_media_bytes: document.media_items.iter().map(|m| m.data.len()).sum(),
            warnings,
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One summary line when valid, otherwise one line per warning and the load error
    pub fn to_text(&self, use_color: bool) -> String {
        if self.valid {
            let label = if use_color {
                "Valid MDOCX:".green().bold().to_string()
            } else {
                "Valid MDOCX:".to_string()
            };
            return format!(
                "{} markdown={} ({}) media={} ({})",
                label,
                self.markdown_file_count,
                human_size(self.total_markdown_bytes),
                self.media_item_count,
                human_size(self.total_media_bytes)
            );
        }

        let label = if use_color {
            "WARNING:".yellow().bold().to_string()
        } else {
            "WARNING:".to_string()
        };
        self.warnings
            .iter()
            .map(|warning| format!("{} {}", label, warning))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Message for the failing exit, or `None` when the bundle is valid
    pub fn failure(&self) -> Option<String> {
        if self.valid {
            return None;
        }
        Some(match &self.error {
            Some(error) => format!("validation failed: {}", error),
            None => format!(
                "validation failed: markdown={} media={}",
                self.markdown_file_count, self.media_item_count
            ),
        })
    }
}

fn header_warnings(header: &HeaderInfo) -> Vec<String> {
    let mut warnings = Vec::new();
    if !header.magic_valid {
        warnings.push("invalid magic bytes".to_string());
    }
    if header.version != SUPPORTED_VERSION {
        warnings.push(format!(
            "header version is {}, expected {}",
            header.version, SUPPORTED_VERSION
        ));
    }
    if header.fixed_header_size as usize != FIXED_HEADER_SIZE {
        warnings.push(format!(
            "fixed header size is {}, expected {}",
            header.fixed_header_size, FIXED_HEADER_SIZE
        ));
    }
    if !header.reserved_clean {
        warnings.push("reserved header bytes are not zero".to_string());
    }
    warnings
}

fn problem_warning(problem: &BundleError) -> String {
    match problem {
        BundleError::DuplicatePath(path) => format!("duplicate markdown path: {:?}", path),
        BundleError::DuplicateMediaId { id, .. } => format!("duplicate media ID: {:?}", id),
        other => other.to_string(),
    }
}

/// Byte count in binary units with two decimals above 1 KiB
pub fn human_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * KIB;
    const GIB: usize = 1024 * MIB;

    match bytes {
        b if b >= GIB => format!("{:.2} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.2} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.2} KiB", b as f64 / KIB as f64),
        b => format!("{} B", b),
    }
}
