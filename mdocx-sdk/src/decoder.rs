// ABOUTME: Interface for pluggable container codecs
// ABOUTME: The binary MDOCX codec lives outside this workspace and plugs in here

use crate::document::Document;
use crate::error::Result;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Verify per-section hashes (container) or container paths (unpacked)
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Turns a container byte stream into a Document
pub trait BundleDecoder {
    fn decode(&self, reader: &mut dyn Read, options: &DecodeOptions) -> Result<Document>;
}

impl<F> BundleDecoder for F
where
    F: Fn(&mut dyn Read, &DecodeOptions) -> Result<Document>,
{
    fn decode(&self, reader: &mut dyn Read, options: &DecodeOptions) -> Result<Document> {
        self(reader, options)
    }
}
