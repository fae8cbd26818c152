// ABOUTME: Sixel graphics protocol implementation
// ABOUTME: Quantizes RGBA pixels to a palette and emits a DCS Sixel sequence

use super::{ImageError, ImageProtocol};
use crate::constants::image::{SIXEL_DIFFUSION, SIXEL_MAX_COLORS};
use image::DynamicImage;

pub struct SixelProtocol {
    options: icy_sixel::EncodeOptions,
}

impl SixelProtocol {
    pub fn new() -> Self {
        Self {
            options: icy_sixel::EncodeOptions {
                max_colors: SIXEL_MAX_COLORS,
                diffusion: SIXEL_DIFFUSION,
                quantize_method: icy_sixel::QuantizeMethod::Wu,
            },
        }
    }
}

impl Default for SixelProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProtocol for SixelProtocol {
    fn render_image(&self, img: &DynamicImage) -> Result<String, ImageError> {
        if img.width() == 0 || img.height() == 0 {
            return Err(ImageError::Encode("image has no pixels".to_string()));
        }

        let rgba = img.to_rgba8();
        icy_sixel::sixel_encode(
            rgba.as_raw(),
            rgba.width() as usize,
            rgba.height() as usize,
            &self.options,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "sixel"
    }
}
