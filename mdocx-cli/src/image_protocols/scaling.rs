// ABOUTME: Terminal-aware image scaling and dimension management
// ABOUTME: Fits images within a pixel budget derived from terminal cells while preserving aspect ratio

use super::ImageError;
use crate::constants::image::{CELL_HEIGHT_PX, CELL_WIDTH_PX, MIN_HEIGHT_PX, MIN_WIDTH_PX, STATUS_ROWS};
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::borrow::Cow;

/// Maximum pixel area available for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBudget {
    pub max_width: i64,
    pub max_height: i64,
}

impl PixelBudget {
    /// Budget for a terminal of `width` x `height` cells, leaving room for the status rows
    pub fn from_cells(width: u16, height: u16) -> Self {
        let max_width = i64::from(width) * CELL_WIDTH_PX;
        let max_height = (i64::from(height) - STATUS_ROWS) * CELL_HEIGHT_PX;
        Self {
            max_width: max_width.max(MIN_WIDTH_PX),
            max_height: max_height.max(MIN_HEIGHT_PX),
        }
    }
}

/// Fit an image within the given bounds, never upscaling.
///
/// Non-positive bounds are clamped to the minimum budget. Images that already
/// fit, or that have a zero dimension, are returned borrowed.
pub fn fit_within(img: &DynamicImage, max_width: i64, max_height: i64) -> Cow<'_, DynamicImage> {
    let max_width = if max_width <= 0 { MIN_WIDTH_PX } else { max_width };
    let max_height = if max_height <= 0 { MIN_HEIGHT_PX } else { max_height };

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Cow::Borrowed(img);
    }
    if i64::from(width) <= max_width && i64::from(height) <= max_height {
        return Cow::Borrowed(img);
    }

    let (target_width, target_height) = target_dimensions(width, height, max_width, max_height);
    log::debug!(
        "Scaling image from {}x{} to {}x{}",
        width,
        height,
        target_width,
        target_height
    );

    Cow::Owned(img.resize_exact(target_width, target_height, FilterType::Triangle))
}

fn target_dimensions(width: u32, height: u32, max_width: i64, max_height: i64) -> (u32, u32) {
    let width_ratio = max_width as f64 / f64::from(width);
    let height_ratio = max_height as f64 / f64::from(height);

    // Use the smaller ratio to ensure image fits in both dimensions
    let scale = width_ratio.min(height_ratio);

    let target_width = ((f64::from(width) * scale).floor() as u32).max(1);
    let target_height = ((f64::from(height) * scale).floor() as u32).max(1);
    (target_width, target_height)
}

#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageMetadata {
    /// Read dimensions and format from the image header without decoding pixels
    pub fn read(data: &[u8]) -> Result<Self, ImageError> {
        let reader = image::ImageReader::new(std::io::Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ImageError::Decode(e.to_string()))?;

        let format = reader.format().ok_or(ImageError::UnknownFormat)?;

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| ImageError::Decode(e.to_string()))?;

        Ok(Self {
            width,
            height,
            format,
        })
    }

    pub fn format_name(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::WebP => "WebP",
            ImageFormat::Tiff => "TIFF",
            ImageFormat::Bmp => "BMP",
            _ => "Unknown",
        }
    }
}
