// ABOUTME: Custom error types for the MDOCX SDK with user-friendly messages
// ABOUTME: Covers bundle loading, header reading, and document validation failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid metadata JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Metadata must be a JSON object")]
    MetadataNotObject,

    #[error("Duplicate markdown path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate media ID {id:?} generated from {path:?} (conflicts with {previous:?})")]
    DuplicateMediaId {
        id: String,
        path: String,
        previous: String,
    },

    #[error("Invalid container path {path:?}: {reason}")]
    InvalidContainerPath { path: String, reason: &'static str },

    #[error("Header too short: expected {expected} bytes, found {found}")]
    HeaderTooShort { expected: usize, found: usize },

    #[error("No decoder available for container file {0}")]
    NoDecoder(PathBuf),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl BundleError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            BundleError::MetadataNotObject | BundleError::Json(_) => {
                Some("metadata.json must contain a single JSON object, e.g. {\"title\": \"Docs\"}")
            }
            BundleError::DuplicateMediaId { .. } => {
                Some("Rename one of the media files so their generated IDs differ")
            }
            BundleError::InvalidContainerPath { .. } => Some(
                "Container paths must be relative, use forward slashes, and contain no '.' or '..' segments",
            ),
            BundleError::HeaderTooShort { .. } => {
                Some("The file is not an MDOCX container (the fixed header is 32 bytes)")
            }
            BundleError::NoDecoder(_) => Some(
                "Extract the bundle with an MDOCX codec and pass the output directory instead",
            ),
            BundleError::Decode(_) => {
                Some("The container may be truncated or written by an incompatible encoder")
            }
            _ => None,
        }
    }

    /// Whether retrying without strict checks could succeed
    pub fn is_strictness_related(&self) -> bool {
        matches!(
            self,
            BundleError::Decode(_) | BundleError::InvalidContainerPath { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
