use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::buffer::BgrImage;

/// Height the preview is scaled to, in pixels.
pub const PREVIEW_HEIGHT: u32 = 500;

/// RGB bytes ready to upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub width: usize,
    pub height: usize,
    /// Bytes per row.
    pub stride: usize,
    pub rgb: Vec<u8>,
}

/// Reorder a BGR image into RGB.
pub fn to_display_frame(img: &BgrImage) -> DisplayFrame {
    let mut rgb = Vec::with_capacity(img.as_bytes().len());
    for [b, g, r] in img.pixels() {
        rgb.extend_from_slice(&[r, g, b]);
    }
    DisplayFrame {
        width: img.width(),
        height: img.height(),
        stride: img.width() * 3,
        rgb,
    }
}

/// Resize to `height`, preserving aspect ratio, with nearest-neighbour sampling.
pub fn scale_to_height(frame: &DisplayFrame, height: u32) -> DisplayFrame {
    if frame.width == 0 || frame.height == 0 || frame.height as u32 == height {
        return frame.clone();
    }
    let Some(src) = RgbImage::from_raw(frame.width as u32, frame.height as u32, frame.rgb.clone())
    else {
        return frame.clone();
    };

    let scale = height as f64 / frame.height as f64;
    let new_w = ((frame.width as f64 * scale).round() as u32).max(1);
    let new_h = height.max(1);
    let resized = imageops::resize(&src, new_w, new_h, FilterType::Nearest);

    DisplayFrame {
        width: new_w as usize,
        height: new_h as usize,
        stride: new_w as usize * 3,
        rgb: resized.into_raw(),
    }
}

/// Frame for the preview panel: RGB order, scaled to [`PREVIEW_HEIGHT`].
pub fn preview_frame(img: &BgrImage) -> DisplayFrame {
    scale_to_height(&to_display_frame(img), PREVIEW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_swapped() {
        let img = BgrImage::from_raw(1, 1, vec![1, 2, 3]).unwrap();
        let frame = to_display_frame(&img);
        assert_eq!(frame.rgb, vec![3, 2, 1]);
        assert_eq!(frame.stride, 3);
    }

    #[test]
    fn scaling_keeps_aspect_ratio() {
        let img = BgrImage::from_pixel(200, 100, [0, 0, 255]);
        let frame = preview_frame(&img);
        assert_eq!((frame.width, frame.height), (1000, 500));
        assert_eq!(frame.stride, 3000);
        assert_eq!(frame.rgb.len(), 1000 * 500 * 3);
        assert_eq!(&frame.rgb[..3], &[255, 0, 0]);
    }

    #[test]
    fn very_tall_image_keeps_one_column() {
        let img = BgrImage::from_pixel(1, 2000, [9, 9, 9]);
        let frame = preview_frame(&img);
        assert_eq!((frame.width, frame.height), (1, 500));
    }
}
