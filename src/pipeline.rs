use std::ops::RangeInclusive;

use crate::adjust::clahe::ClaheParams;
use crate::adjust::{equalize, grayscale, tone};
use crate::buffer::BgrImage;

pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = -100..=100;
pub const CONTRAST_RANGE: RangeInclusive<i32> = 1..=100;
pub const SATURATION_RANGE: RangeInclusive<i32> = 0..=100;

/// Slider positions controlled by the user.
///
/// Values are stored the way the sliders report them; the conversion to
/// real factors happens in [`Adjustment::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustParams {
    /// -100..=100, scales HSV value by `1 + v/100`
    pub brightness: i32,
    /// 1..=100, channel gain `v/10`
    pub contrast: i32,
    /// 0..=100, scales HSV saturation by `v/10`
    pub saturation: i32,
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 10,
            saturation: 10,
        }
    }
}

/// One operation the user can apply to the loaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Grayscale,
    EqualizeLinear,
    EqualizeAdaptive(ClaheParams),
    Brightness(i32),
    Contrast(i32),
    Saturation(i32),
}

fn clamp_to(v: i32, range: &RangeInclusive<i32>) -> i32 {
    v.clamp(*range.start(), *range.end())
}

impl Adjustment {
    pub fn name(self) -> &'static str {
        match self {
            Adjustment::Grayscale => "grayscale",
            Adjustment::EqualizeLinear => "linear equalization",
            Adjustment::EqualizeAdaptive(_) => "adaptive equalization",
            Adjustment::Brightness(_) => "brightness",
            Adjustment::Contrast(_) => "contrast",
            Adjustment::Saturation(_) => "saturation",
        }
    }

    /// Produce a new image from `source`. `source` itself is never modified.
    pub fn apply(self, source: &BgrImage) -> BgrImage {
        match self {
            Adjustment::Grayscale => grayscale::to_grayscale(source),
            Adjustment::EqualizeLinear => equalize::equalize_linear(source),
            Adjustment::EqualizeAdaptive(params) => equalize::equalize_adaptive(source, &params),
            Adjustment::Brightness(v) => {
                let v = clamp_to(v, &BRIGHTNESS_RANGE);
                tone::scale_value(source, 1.0 + v as f64 / 100.0)
            }
            Adjustment::Contrast(v) => {
                let v = clamp_to(v, &CONTRAST_RANGE);
                tone::scale_channels(source, v as f64 / 10.0)
            }
            Adjustment::Saturation(v) => {
                let v = clamp_to(v, &SATURATION_RANGE);
                tone::scale_saturation(source, v as f64 / 10.0)
            }
        }
    }
}
