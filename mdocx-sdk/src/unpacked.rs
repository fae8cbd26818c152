// ABOUTME: Loader for extracted bundle directories
// ABOUTME: Maps metadata.json, markdown files, and remaining assets onto a Document

use crate::constants::unpacked::{MARKDOWN_EXTENSION, METADATA_FILE};
use crate::container_path::{make_id_from_path, sanitize_container_path};
use crate::decoder::DecodeOptions;
use crate::document::{Document, MarkdownFile, MediaItem, Metadata};
use crate::error::{BundleError, Result};
use crate::mime::detect_mime_type;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub struct UnpackedBundle;

impl UnpackedBundle {
    /// Load every file under `dir` in sorted order.
    pub fn load<P: AsRef<Path>>(dir: P, options: &DecodeOptions) -> Result<Document> {
        let dir = dir.as_ref();
        let mut metadata = None;
        let mut markdown_files = Vec::new();
        let mut media_items = Vec::new();
        let mut seen_ids: HashMap<String, String> = HashMap::new();

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                BundleError::io(path, source)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let container_path = container_path_for(dir, entry.path());
            if options.strict {
                sanitize_container_path(&container_path)?;
            }

            let data = fs::read(entry.path()).map_err(|e| BundleError::io(entry.path(), e))?;

            if container_path == METADATA_FILE {
                metadata = Some(parse_metadata(&data)?);
                continue;
            }

            if is_markdown(entry.path()) {
                markdown_files.push(MarkdownFile {
                    path: container_path,
                    content: data,
                });
                continue;
            }

            let id = make_id_from_path(&container_path);
            if let Some(previous) = seen_ids.get(&id) {
                return Err(BundleError::DuplicateMediaId {
                    id,
                    path: container_path,
                    previous: previous.clone(),
                });
            }
            seen_ids.insert(id.clone(), container_path.clone());

            media_items.push(MediaItem {
                id,
                mime_type: detect_mime_type(entry.path()).to_string(),
                path: container_path,
                data,
            });
        }

        log::debug!(
            "Loaded unpacked bundle {}: {} markdown files, {} media items, metadata: {}",
            dir.display(),
            markdown_files.len(),
            media_items.len(),
            metadata.is_some()
        );

        Document::new(metadata, markdown_files, media_items)
    }
}

fn container_path_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
}

fn parse_metadata(data: &[u8]) -> Result<Metadata> {
    match serde_json::from_slice::<serde_json::Value>(data)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(BundleError::MetadataNotObject),
    }
}
