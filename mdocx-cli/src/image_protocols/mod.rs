// ABOUTME: Image protocol implementations for full-screen terminal image preview
// ABOUTME: Defines the protocol trait, its error type, and the decode-scale-encode pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("could not determine image format")]
    UnknownFormat,

    #[error("no displayable image: {0}")]
    Encode(String),
}

pub trait ImageProtocol {
    /// Render a decoded image as a terminal escape sequence
    fn render_image(&self, img: &image::DynamicImage) -> Result<String, ImageError>;

    /// Protocol name for logging
    fn name(&self) -> &'static str;
}

pub mod detection;
pub mod preview;
pub mod scaling;
pub mod sixel;

pub use detection::{EnvSignals, TerminalCapabilities};
pub use preview::ImagePreview;
pub use scaling::{fit_within, ImageMetadata, PixelBudget};
pub use sixel::SixelProtocol;
