// ABOUTME: Plain-text projections shown in the browser's content pane
// ABOUTME: Formats metadata JSON, header fields, and media item details

use crate::constants::placeholders::{NO_HEADER, NO_METADATA, VIEW_IMAGE_HINT};
use crate::image_protocols::ImageMetadata;
use mdocx_sdk::{HeaderInfo, MediaItem, Metadata};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Metadata as 2-space indented JSON with sorted keys
pub fn metadata_view(metadata: Option<&Metadata>) -> String {
    match metadata {
        Some(map) => serde_json::to_string_pretty(map).unwrap_or_else(|e| {
            log::debug!("Failed to format metadata: {}", e);
            NO_METADATA.to_string()
        }),
        None => NO_METADATA.to_string(),
    }
}

pub fn header_view(header: Option<&HeaderInfo>) -> String {
    let Some(header) = header else {
        return NO_HEADER.to_string();
    };

    format!(
        "Magic: {}\nMagic Valid: {}\nVersion: {}\nHeader Flags: 0x{:04x}\nFixed Header Size: {}\nMetadata Length: {}\nReserved Clean: {}\n",
        header.magic_hex,
        header.magic_valid,
        header.version,
        header.header_flags,
        header.fixed_header_size,
        header.metadata_length,
        header.reserved_clean,
    )
}

pub fn media_detail(item: &MediaItem, images_enabled: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", item.id);
    if !item.path.is_empty() {
        let _ = writeln!(out, "Path: {}", item.path);
    }
    if !item.mime_type.is_empty() {
        let _ = writeln!(out, "MIME: {}", item.mime_type);
    }
    let _ = writeln!(out, "Size: {} bytes", item.data.len());
    let _ = writeln!(out, "SHA-256: {:x}", Sha256::digest(&item.data));

    if item.is_image() {
        match ImageMetadata::read(&item.data) {
            Ok(info) => {
                let _ = writeln!(out, "Dimensions: {} x {}", info.width, info.height);
                let _ = writeln!(out, "Format: {}", info.format_name());
            }
            Err(e) => log::debug!("No image header for {}: {}", item.id, e),
        }
        if images_enabled {
            out.push('\n');
            out.push_str(VIEW_IMAGE_HINT);
        }
    }

    out
}
