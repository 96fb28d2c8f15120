use image::{GrayImage, Luma};
use imageproc::stats::cumulative_histogram;

use super::clahe::{self, ClaheParams};
use super::grayscale::luma;
use crate::buffer::BgrImage;

fn gray_image(img: &BgrImage) -> GrayImage {
    GrayImage::from_fn(img.width() as u32, img.height() as u32, |x, y| {
        Luma([luma(img.pixel(x as usize, y as usize))])
    })
}

/// Global histogram equalization of the luma plane, expanded to three channels.
///
/// The darkest occupied level maps to 0 and the brightest to 255. A plane
/// with a single level is returned unchanged.
pub fn equalize_linear(img: &BgrImage) -> BgrImage {
    if img.is_empty() {
        return img.clone();
    }
    let gray = gray_image(img);
    let hist = cumulative_histogram(&gray);
    let cdf = &hist.channels[0];
    let total = cdf[255];
    let cdf_min = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0);

    if total == cdf_min {
        return BgrImage::from_gray(img.width(), img.height(), gray.as_raw());
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    for (out, &c) in lut.iter_mut().zip(cdf.iter()) {
        let v = c.saturating_sub(cdf_min) as f64 * scale;
        *out = v.round_ties_even().clamp(0.0, 255.0) as u8;
    }
    let equalized: Vec<u8> = gray.as_raw().iter().map(|&v| lut[v as usize]).collect();
    BgrImage::from_gray(img.width(), img.height(), &equalized)
}

/// Contrast-limited adaptive equalization of the luma plane, expanded to
/// three channels.
pub fn equalize_adaptive(img: &BgrImage, params: &ClaheParams) -> BgrImage {
    let gray = gray_image(img);
    let out = clahe::apply(gray.as_raw(), img.width(), img.height(), params);
    BgrImage::from_gray(img.width(), img.height(), &out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> BgrImage {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let v = (40 + (x + y) % 60) as u8;
                data.extend_from_slice(&[v, v.wrapping_add(5), v / 2]);
            }
        }
        BgrImage::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn linear_output_is_gray_and_monotonic() {
        let img = gradient(32, 24);
        let input = crate::adjust::grayscale::luma_plane(&img);
        let out = equalize_linear(&img);

        let mut mapping = [None::<u8>; 256];
        for (i, [b, g, r]) in out.pixels().enumerate() {
            assert_eq!(b, g);
            assert_eq!(g, r);
            let src = input[i] as usize;
            // Same input intensity always maps to the same output.
            match mapping[src] {
                Some(prev) => assert_eq!(prev, b),
                None => mapping[src] = Some(b),
            }
        }
        let mapped: Vec<u8> = mapping.iter().flatten().copied().collect();
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn linear_stretches_narrow_range() {
        let img = gradient(32, 24);
        let out = equalize_linear(&img);
        let max = out.pixels().map(|p| p[0]).max().unwrap();
        assert_eq!(max, 255);
    }

    #[test]
    fn linear_leaves_single_level_unchanged() {
        let img = BgrImage::from_pixel(4, 4, [128, 128, 128]);
        assert_eq!(equalize_linear(&img), img);
    }

    #[test]
    fn linear_spreads_two_levels_to_full_range() {
        let mut data = vec![100u8; 4 * 2 * 3];
        data.extend(vec![150u8; 4 * 2 * 3]);
        let img = BgrImage::from_raw(4, 4, data).unwrap();
        let out = equalize_linear(&img);
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(3, 3), [255, 255, 255]);
    }

    #[test]
    fn adaptive_output_is_gray() {
        let img = gradient(50, 37);
        let out = equalize_adaptive(&img, &ClaheParams::default());
        assert_eq!((out.width(), out.height()), (50, 37));
        assert!(out.pixels().all(|[b, g, r]| b == g && g == r));
    }
}
