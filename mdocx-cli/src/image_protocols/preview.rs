// ABOUTME: Full-screen image preview pipeline
// ABOUTME: Decodes media bytes, scales them to the terminal, and encodes them with a protocol

use super::scaling::{fit_within, PixelBudget};
use super::{ImageError, ImageProtocol, SixelProtocol};

pub struct ImagePreview {
    protocol: Box<dyn ImageProtocol>,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::with_protocol(Box::new(SixelProtocol::new()))
    }

    pub fn with_protocol(protocol: Box<dyn ImageProtocol>) -> Self {
        Self { protocol }
    }

    /// Produce an escape sequence showing `data` on a terminal of `width` x `height` cells
    pub fn render(&self, data: &[u8], width: u16, height: u16) -> Result<String, ImageError> {
        let img = image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))?;

        let budget = PixelBudget::from_cells(width, height);
        let scaled = fit_within(&img, budget.max_width, budget.max_height);

        let sequence = self.protocol.render_image(&scaled)?;
        log::debug!(
            "Encoded {}x{} image with {} ({} bytes)",
            scaled.width(),
            scaled.height(),
            self.protocol.name(),
            sequence.len()
        );
        Ok(sequence)
    }
}

impl Default for ImagePreview {
    fn default() -> Self {
        Self::new()
    }
}
