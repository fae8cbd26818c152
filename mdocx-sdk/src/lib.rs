// ABOUTME: MDOCX SDK library for working with decoded document bundles
// ABOUTME: Provides the data model, header reader, decoder interface, and unpacked loader

pub mod constants;
pub mod container_path;
pub mod decoder;
pub mod document;
pub mod error;
pub mod header;
pub mod mime;
pub mod unpacked;

pub use container_path::{make_id_from_path, sanitize_container_path};
pub use decoder::{BundleDecoder, DecodeOptions};
pub use document::{Document, MarkdownFile, MediaItem, Metadata};
pub use error::{BundleError, Result};
pub use header::{HeaderInfo, read_header_info};
pub use unpacked::UnpackedBundle;
