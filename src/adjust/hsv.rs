/// Hue/saturation/value triple.
///
/// `h` is in degrees `[0, 360)`, `s` in `[0, 1]` and `v` on the 8-bit
/// scale `[0, 255]`, all in double precision so that an unscaled round trip
/// reproduces the input bytes exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const MAX_SATURATION: f64 = 1.0;
    pub const MAX_VALUE: f64 = 255.0;

    pub fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        let (b, g, r) = (b as f64, g as f64, r as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self { h, s, v: max }
    }

    pub fn to_bgr(self) -> [u8; 3] {
        let c = self.v * self.s;
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [to_u8(b + m), to_u8(g + m), to_u8(r + m)]
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
