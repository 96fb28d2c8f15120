use crate::buffer::BgrImage;

// BT.601 luma weights in 14-bit fixed point (0.114, 0.587, 0.299).
const LUMA_SHIFT: u32 = 14;
const LUMA_B: u32 = 1868;
const LUMA_G: u32 = 9617;
const LUMA_R: u32 = 4899;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Luma of a single BGR pixel.
#[inline]
pub fn luma([b, g, r]: [u8; 3]) -> u8 {
    let y = (b as u32 * LUMA_B + g as u32 * LUMA_G + r as u32 * LUMA_R + LUMA_ROUND) >> LUMA_SHIFT;
    y.min(255) as u8
}

/// Single-channel luma plane, row-major.
pub fn luma_plane(img: &BgrImage) -> Vec<u8> {
    img.pixels().map(luma).collect()
}

/// Convert to grayscale and expand back to three identical channels.
pub fn to_grayscale(img: &BgrImage) -> BgrImage {
    BgrImage::from_gray(img.width(), img.height(), &luma_plane(img))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_of_primaries() {
        assert_eq!(luma([0, 0, 0]), 0);
        assert_eq!(luma([255, 255, 255]), 255);
        // 0.299 * 255 = 76.2
        assert_eq!(luma([0, 0, 255]), 76);
        // 0.587 * 255 = 149.7
        assert_eq!(luma([0, 255, 0]), 150);
        // 0.114 * 255 = 29.1
        assert_eq!(luma([255, 0, 0]), 29);
    }

    #[test]
    fn gray_pixels_are_unchanged() {
        for v in [0u8, 1, 64, 127, 128, 200, 255] {
            assert_eq!(luma([v, v, v]), v);
        }
    }

    #[test]
    fn output_channels_are_equal() {
        let img = BgrImage::from_raw(2, 1, vec![10, 200, 30, 255, 0, 90]).unwrap();
        let gray = to_grayscale(&img);
        for [b, g, r] in gray.pixels() {
            assert_eq!(b, g);
            assert_eq!(g, r);
        }
    }
}
