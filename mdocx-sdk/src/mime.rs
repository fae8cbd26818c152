// ABOUTME: MIME type lookup for media files in unpacked bundles
// ABOUTME: Compile-time extension table with an octet-stream fallback

use crate::constants::unpacked::DEFAULT_MIME_TYPE;
use phf::phf_map;
use std::path::Path;

static MIME_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "png" => "image/png",
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    "tif" => "image/tiff",
    "tiff" => "image/tiff",
    "svg" => "image/svg+xml",
    "ico" => "image/x-icon",
    "pdf" => "application/pdf",
    "json" => "application/json",
    "zip" => "application/zip",
    "txt" => "text/plain",
    "csv" => "text/csv",
    "html" => "text/html",
    "htm" => "text/html",
    "css" => "text/css",
    "mp3" => "audio/mpeg",
    "wav" => "audio/wav",
    "ogg" => "audio/ogg",
    "mp4" => "video/mp4",
    "webm" => "video/webm",
    "mov" => "video/quicktime",
};

/// Guess a MIME type from a path's extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
