//! JPEG export
//!
//! The bitmap is flattened to RGB before encoding since JPEG carries no
//! alpha channel. Existing files at the target path are overwritten.

use image::codecs::jpeg::JpegEncoder;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::CapturedImage;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a finished save request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Encode the image as JPEG bytes
pub fn encode_jpeg(image: &CapturedImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgb = image.to_rgb();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;
    Ok(bytes)
}

/// Encode and write the image to exactly `path`.
///
/// The path is the one the save dialog confirmed, so it is never rewritten
/// here: overwrite confirmation only covered that name.
pub fn save_jpeg(image: &CapturedImage, path: &Path, quality: u8) -> Result<(), ExportError> {
    let bytes = encode_jpeg(image, quality)?;

    fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Screenshot saved to {:?}", path);
    Ok(())
}

/// Complete a save request once the dialog has returned.
///
/// `None` means the dialog was cancelled and nothing is written.
pub fn finish_save(
    image: &CapturedImage,
    choice: Option<PathBuf>,
    quality: u8,
) -> Result<SaveOutcome, ExportError> {
    match choice {
        Some(path) => {
            save_jpeg(image, &path, quality)?;
            Ok(SaveOutcome::Saved(path))
        }
        None => Ok(SaveOutcome::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample(width: u32, height: u32) -> CapturedImage {
        CapturedImage::new(RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 128]))).unwrap()
    }

    #[test]
    fn test_encoded_bytes_are_jpeg() {
        let bytes = encode_jpeg(&sample(16, 9), 90).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_saved_file_decodes_to_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");

        let outcome = finish_save(&sample(33, 17), Some(path.clone()), 90).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (33, 17));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpeg");
        fs::write(&path, b"old contents").unwrap();

        save_jpeg(&sample(4, 4), &path, 90).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
    }

    #[test]
    fn test_cancel_leaves_directory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("Screenshot.jpg");
        fs::write(&existing, b"earlier screenshot").unwrap();

        let outcome = finish_save(&sample(4, 4), None, 90).unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["Screenshot.jpg"]);
        assert_eq!(fs::read(&existing).unwrap(), b"earlier screenshot");
    }

    #[test]
    fn test_writes_exactly_the_confirmed_path() {
        let dir = tempfile::tempdir().unwrap();
        let confirmed = dir.path().join("shot");
        let neighbour = dir.path().join("shot.jpg");
        fs::write(&neighbour, b"keep me").unwrap();

        let outcome = finish_save(&sample(5, 3), Some(confirmed.clone()), 90).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(confirmed.clone()));
        assert_eq!(fs::read(&neighbour).unwrap(), b"keep me");
        let decoded = image::load_from_memory(&fs::read(&confirmed).unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (5, 3));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shot.jpg");

        let result = save_jpeg(&sample(4, 4), &path, 90);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
