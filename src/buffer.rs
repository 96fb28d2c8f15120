use image::RgbImage;

/// 8-bit, 3-channel pixel grid stored in blue, green, red order.
///
/// Rows are tightly packed: the stride is always `3 * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BgrImage {
    pub const CHANNELS: usize = 3;

    /// Build from raw BGR bytes. Returns `None` if the length does not match.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * Self::CHANNELS {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Image filled with a single `[b, g, r]` pixel.
    pub fn from_pixel(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * Self::CHANNELS);
        for _ in 0..width * height {
            data.extend_from_slice(&bgr);
        }
        Self { width, height, data }
    }

    /// Reorder a decoded RGB image into BGR.
    pub fn from_rgb(rgb: &RgbImage) -> Self {
        let (w, h) = rgb.dimensions();
        let mut data = Vec::with_capacity(w as usize * h as usize * Self::CHANNELS);
        for p in rgb.pixels() {
            data.extend_from_slice(&[p[2], p[1], p[0]]);
        }
        Self {
            width: w as usize,
            height: h as usize,
            data,
        }
    }

    /// Replicate a single-channel plane across all three channels.
    pub fn from_gray(width: usize, height: usize, gray: &[u8]) -> Self {
        debug_assert_eq!(gray.len(), width * height);
        let mut data = Vec::with_capacity(gray.len() * Self::CHANNELS);
        for &y in gray {
            data.extend_from_slice(&[y, y, y]);
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.width * Self::CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(Self::CHANNELS)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Apply `f` to every pixel, producing a new image of the same size.
    pub fn map_pixels(&self, mut f: impl FnMut([u8; 3]) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for p in self.pixels() {
            data.extend_from_slice(&f(p));
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_swaps_channel_order() {
        let rgb = RgbImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let bgr = BgrImage::from_rgb(&rgb);
        assert_eq!(bgr.pixel(0, 0), [30, 20, 10]);
        assert_eq!(bgr.pixel(1, 0), [60, 50, 40]);
        assert_eq!(bgr.stride(), 6);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(BgrImage::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(BgrImage::from_raw(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn from_gray_replicates_luma() {
        let img = BgrImage::from_gray(3, 1, &[1, 2, 3]);
        assert_eq!(img.as_bytes(), &[1, 1, 1, 2, 2, 2, 3, 3, 3]);
    }
}
