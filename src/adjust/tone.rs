use super::hsv::Hsv;
use crate::buffer::BgrImage;

/// Scale the HSV value channel by `factor`, saturating at 255.
pub fn scale_value(img: &BgrImage, factor: f64) -> BgrImage {
    let factor = factor.max(0.0);
    img.map_pixels(|p| {
        let mut hsv = Hsv::from_bgr(p);
        hsv.v = (hsv.v * factor).min(Hsv::MAX_VALUE);
        hsv.to_bgr()
    })
}

/// Scale the HSV saturation channel by `factor`, saturating at full saturation.
pub fn scale_saturation(img: &BgrImage, factor: f64) -> BgrImage {
    let factor = factor.max(0.0);
    img.map_pixels(|p| {
        let mut hsv = Hsv::from_bgr(p);
        hsv.s = (hsv.s * factor).min(Hsv::MAX_SATURATION);
        hsv.to_bgr()
    })
}

/// Multiply every channel by `gain` in BGR space, rounding half to even and
/// saturating to the 8-bit range.
pub fn scale_channels(img: &BgrImage, gain: f64) -> BgrImage {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        *out = (i as f64 * gain).abs().round_ties_even().clamp(0.0, 255.0) as u8;
    }
    img.map_pixels(|[b, g, r]| [lut[b as usize], lut[g as usize], lut[r as usize]])
}
