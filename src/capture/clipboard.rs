//! Reading screenshots back from the shared clipboard

use gtk4 as gtk;

use gtk::gdk;
use gtk::glib;
use gtk4::prelude::*;
use log::debug;

use crate::app::CapturedImage;

pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to read clipboard: {0}")]
    Read(#[from] glib::Error),

    #[error("Failed to decode clipboard image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Clipboard image has no pixels")]
    Empty,
}

/// Decode PNG bytes into a held image
pub fn decode_png(bytes: &[u8]) -> ClipboardResult<CapturedImage> {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
    CapturedImage::from_dynamic(image).ok_or(ClipboardError::Empty)
}

/// Convert a GDK texture into a held image
pub fn texture_to_image(texture: &gdk::Texture) -> ClipboardResult<CapturedImage> {
    let bytes = texture.save_to_png_bytes();
    decode_png(&bytes)
}

/// Read-only view of the display's clipboard
pub struct ClipboardReader {
    clipboard: gdk::Clipboard,
}

impl ClipboardReader {
    pub fn from_widget(widget: &impl IsA<gtk::Widget>) -> Self {
        Self {
            clipboard: widget.display().clipboard(),
        }
    }

    /// Whether the clipboard currently advertises image data
    pub fn has_image(&self) -> bool {
        self.clipboard
            .formats()
            .contains_type(gdk::Texture::static_type())
    }

    /// Read the clipboard image, `Ok(None)` when there is nothing image-typed.
    pub async fn read_image(&self) -> ClipboardResult<Option<CapturedImage>> {
        if !self.has_image() {
            debug!("Clipboard holds no image data");
            return Ok(None);
        }

        let texture = self.clipboard.read_texture_future().await?;
        texture.as_ref().map(texture_to_image).transpose()
    }
}
