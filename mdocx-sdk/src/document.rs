// ABOUTME: In-memory representation of a decoded MDOCX bundle
// ABOUTME: Holds metadata, markdown files, and media items with uniqueness validation

use crate::error::{BundleError, Result};
use std::collections::{HashMap, HashSet};

/// Free-form bundle metadata, always a JSON object when present
pub type Metadata = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    /// Slash-separated container path, unique within the bundle
    pub path: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: String,
    /// Container path; empty when the producer did not record one
    pub path: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl MediaItem {
    pub fn is_image(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("image/")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub metadata: Option<Metadata>,
    pub markdown_files: Vec<MarkdownFile>,
    pub media_items: Vec<MediaItem>,
}

impl Document {
    pub fn new(
        metadata: Option<Metadata>,
        markdown_files: Vec<MarkdownFile>,
        media_items: Vec<MediaItem>,
    ) -> Result<Self> {
        let doc = Self {
            metadata,
            markdown_files,
            media_items,
        };
        doc.validate()?;
        Ok(doc)
    }

    /// Check that markdown paths and media IDs are unique
    pub fn validate(&self) -> Result<()> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Every repeated markdown path, then every repeated media ID, in document order
    pub fn problems(&self) -> Vec<BundleError> {
        let mut problems = Vec::new();

        let mut paths = HashSet::new();
        for file in &self.markdown_files {
            if !paths.insert(file.path.as_str()) {
                problems.push(BundleError::DuplicatePath(file.path.clone()));
            }
        }

        let mut ids: HashMap<&str, &str> = HashMap::new();
        for item in &self.media_items {
            if let Some(previous) = ids.insert(item.id.as_str(), item.path.as_str()) {
                problems.push(BundleError::DuplicateMediaId {
                    id: item.id.clone(),
                    path: item.path.clone(),
                    previous: previous.to_string(),
                });
            }
        }

        problems
    }

    pub fn markdown_file(&self, path: &str) -> Option<&MarkdownFile> {
        self.markdown_files.iter().find(|f| f.path == path)
    }

    pub fn media_item(&self, id: &str) -> Option<&MediaItem> {
        self.media_items.iter().find(|m| m.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_none() && self.markdown_files.is_empty() && self.media_items.is_empty()
    }
}
