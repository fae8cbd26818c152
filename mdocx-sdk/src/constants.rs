// ABOUTME: Centralized constants for the MDOCX SDK
// ABOUTME: Contains the fixed header layout and unpacked bundle conventions

/// Fixed-size container preamble layout
pub mod header {
    use std::ops::Range;

    /// Size of the fixed header in bytes
    pub const FIXED_HEADER_SIZE: usize = 32;

    /// Container format version this workspace understands
    pub const SUPPORTED_VERSION: u16 = 1;

    /// Expected magic bytes at the start of every container
    pub const MAGIC: [u8; 8] = *b"MDOCX\r\n\x1a";

    pub const MAGIC_RANGE: Range<usize> = 0..8;
    pub const VERSION_RANGE: Range<usize> = 8..10;
    pub const FLAGS_RANGE: Range<usize> = 10..12;
    pub const FIXED_SIZE_RANGE: Range<usize> = 12..16;
    pub const METADATA_LENGTH_RANGE: Range<usize> = 16..20;

    /// Bytes that a conforming producer leaves zeroed
    pub const RESERVED_RANGE: Range<usize> = 20..32;
}

/// Layout conventions of an extracted bundle directory
pub mod unpacked {
    /// File holding the bundle metadata object
    pub const METADATA_FILE: &str = "metadata.json";

    /// Extension that marks a file as markdown content
    pub const MARKDOWN_EXTENSION: &str = "md";

    /// ID used when a media path has no usable characters
    pub const FALLBACK_MEDIA_ID: &str = "media";

    /// MIME type used when the extension is unknown
    pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";
}
