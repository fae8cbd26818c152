// ABOUTME: Opens a bundle from disk as a Document plus optional header information
// ABOUTME: Directories use the unpacked loader; container files go through a pluggable decoder

use mdocx_sdk::{
    read_header_info, BundleDecoder, BundleError, DecodeOptions, Document, HeaderInfo,
    UnpackedBundle,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A loaded bundle and its fixed header, when the source was a container file
pub struct OpenedBundle {
    pub document: Document,
    pub header: Option<HeaderInfo>,
}

#[derive(Default)]
pub struct BundleOpener {
    decoder: Option<Box<dyn BundleDecoder>>,
}

impl BundleOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder(decoder: Box<dyn BundleDecoder>) -> Self {
        Self {
            decoder: Some(decoder),
        }
    }

    /// Load and check that markdown paths and media IDs are unique
    pub fn open<P: AsRef<Path>>(
        &self,
        path: P,
        options: &DecodeOptions,
    ) -> Result<OpenedBundle, BundleError> {
        let opened = self.load(path, options)?;
        opened.document.validate()?;
        Ok(opened)
    }

    /// Load without the uniqueness check, so every problem can be reported
    pub fn load<P: AsRef<Path>>(
        &self,
        path: P,
        options: &DecodeOptions,
    ) -> Result<OpenedBundle, BundleError> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path).map_err(|e| BundleError::io(path, e))?;

        if meta.is_dir() {
            log::debug!("Loading unpacked bundle from {}", path.display());
            let document = UnpackedBundle::load(path, options)?;
            return Ok(OpenedBundle {
                document,
                header: None,
            });
        }

        let header = read_header_info(path)?;
        if !header.magic_valid {
            log::warn!("{} does not start with the MDOCX magic bytes", path.display());
        }

        let Some(decoder) = &self.decoder else {
            return Err(BundleError::NoDecoder(path.to_path_buf()));
        };

        let file = File::open(path).map_err(|e| BundleError::io(path, e))?;
        let mut reader = BufReader::new(file);
        let document = decoder.decode(&mut reader, options)?;

        Ok(OpenedBundle {
            document,
            header: Some(header),
        })
    }
}
