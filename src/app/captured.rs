//! Captured bitmap held by the application.

use image::{DynamicImage, RgbImage, RgbaImage};

/// A complete RGBA bitmap read back from the clipboard.
///
/// Zero-sized images are rejected at construction, so a held
/// `CapturedImage` is always renderable.
#[derive(Clone, Debug)]
pub struct CapturedImage {
    pixels: RgbaImage,
}

impl CapturedImage {
    pub fn new(pixels: RgbaImage) -> Option<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return None;
        }
        Some(Self { pixels })
    }

    pub fn from_dynamic(image: DynamicImage) -> Option<Self> {
        Self::new(image.into_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Flatten to RGB, dropping the alpha channel (JPEG has none).
    pub fn to_rgb(&self) -> RgbImage {
        DynamicImage::ImageRgba8(self.pixels.clone()).into_rgb8()
    }
}
