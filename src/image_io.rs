use image::ImageReader;
use std::path::Path;

use crate::buffer::BgrImage;
use crate::error::LoadError;

/// Extensions offered by the "Images" filter of the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "xpm", "jpg", "bmp"];

/// Decode an image file into an 8-bit BGR buffer.
///
/// The format is guessed from the file contents first and the extension
/// second, so a mislabelled file still decodes when the codec is available.
pub fn load_image(path: &Path) -> Result<BgrImage, LoadError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let decoded = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let bgr = BgrImage::from_rgb(&decoded.to_rgb8());
    if bgr.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(bgr)
}
