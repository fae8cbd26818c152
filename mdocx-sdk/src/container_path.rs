// ABOUTME: Container path validation and media ID generation
// ABOUTME: Keeps bundle-relative paths portable and derives stable IDs from them

use crate::constants::unpacked::FALLBACK_MEDIA_ID;
use crate::error::{BundleError, Result};

/// Validate a slash-separated container path, returning it unchanged when valid.
pub fn sanitize_container_path(path: &str) -> Result<&str> {
    let invalid = |reason| BundleError::InvalidContainerPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if path.contains('\\') {
        return Err(invalid("backslashes are not allowed"));
    }
    if path.starts_with('/') {
        return Err(invalid("path must be relative"));
    }
    if path.contains(':') {
        return Err(invalid("drive letters and colons are not allowed"));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("'.' and '..' segments are not allowed")),
            _ => {}
        }
    }

    Ok(path)
}

/// Derive a media ID: lowercase ASCII alphanumerics, everything else becomes '_'.
pub fn make_id_from_path(path: &str) -> String {
    let mapped: String = path
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = mapped.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_MEDIA_ID.to_string()
    } else {
        trimmed.to_string()
    }
}
