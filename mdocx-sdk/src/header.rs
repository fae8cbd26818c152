// ABOUTME: Reader for the fixed 32-byte MDOCX container preamble
// ABOUTME: Works independently of full decoding so a header can be shown even when decoding fails

use crate::constants::header::{
    FIXED_HEADER_SIZE, FLAGS_RANGE, FIXED_SIZE_RANGE, MAGIC, MAGIC_RANGE, METADATA_LENGTH_RANGE,
    RESERVED_RANGE, VERSION_RANGE,
};
use crate::error::{BundleError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub magic_hex: String,
    pub magic_valid: bool,
    pub version: u16,
    pub header_flags: u16,
    pub fixed_header_size: u32,
    pub metadata_length: u32,
    pub reserved_clean: bool,
}

impl HeaderInfo {
    /// Parse a header from the first bytes of a container
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FIXED_HEADER_SIZE {
            return Err(BundleError::HeaderTooShort {
                expected: FIXED_HEADER_SIZE,
                found: bytes.len(),
            });
        }

        let magic = &bytes[MAGIC_RANGE];
        let magic_hex = magic.iter().map(|b| format!("{:02x}", b)).collect();

        Ok(Self {
            magic_hex,
            magic_valid: magic == MAGIC,
            version: u16::from_le_bytes([bytes[VERSION_RANGE.start], bytes[VERSION_RANGE.start + 1]]),
            header_flags: u16::from_le_bytes([bytes[FLAGS_RANGE.start], bytes[FLAGS_RANGE.start + 1]]),
            fixed_header_size: read_u32(bytes, FIXED_SIZE_RANGE.start),
            metadata_length: read_u32(bytes, METADATA_LENGTH_RANGE.start),
            reserved_clean: bytes[RESERVED_RANGE].iter().all(|b| *b == 0),
        })
    }
}

fn read_u32(bytes: &[u8], start: usize) -> u32 {
    u32::from_le_bytes([
        bytes[start],
        bytes[start + 1],
        bytes[start + 2],
        bytes[start + 3],
    ])
}

/// Read the fixed header from the start of a file
pub fn read_header_info<P: AsRef<Path>>(path: P) -> Result<HeaderInfo> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| BundleError::io(path, e))?;

    let mut buf = Vec::with_capacity(FIXED_HEADER_SIZE);
    file.by_ref()
        .take(FIXED_HEADER_SIZE as u64)
        .read_to_end(&mut buf)
        .map_err(|e| BundleError::io(path, e))?;

    log::debug!("Read {} header bytes from {}", buf.len(), path.display());
    HeaderInfo::parse(&buf)
}
