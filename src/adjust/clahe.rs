//! Contrast-limited adaptive histogram equalization (CLAHE).
//!
//! The image is split into a grid of equal tiles. Each tile gets its own
//! clipped histogram and lookup table, and every output pixel blends the
//! lookup tables of the four nearest tile centers bilinearly so that tile
//! borders do not show.
//!
//! When the image size is not a multiple of the grid the tiles are computed
//! over a virtual image extended to the right and bottom by mirror
//! reflection (the edge pixel itself is not repeated).

const BINS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaheParams {
    /// Tiles per row and per column.
    pub tile_grid: usize,
    /// Maximum bin height relative to a flat histogram.
    pub clip_limit: f32,
}

impl ClaheParams {
    pub const TILE_GRID: usize = 8;
    pub const CLIP_LIMIT: f32 = 2.0;
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            tile_grid: Self::TILE_GRID,
            clip_limit: Self::CLIP_LIMIT,
        }
    }
}

/// Index into a plane of length `n` with mirror reflection at both ends.
fn reflect_101(mut i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}

/// Clip bins at `limit` and spread the excess back over the histogram.
fn clip_histogram(hist: &mut [u32; BINS], limit: u32) {
    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }

    let batch = excess / BINS as u32;
    let residual = (excess - batch * BINS as u32) as usize;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (BINS / residual).max(1);
        for i in (0..BINS).step_by(step).take(residual) {
            hist[i] += 1;
        }
    }
}

fn tile_lut(hist: &[u32; BINS], tile_area: usize) -> [u8; BINS] {
    let scale = 255.0 / tile_area as f32;
    let mut lut = [0u8; BINS];
    let mut sum = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        sum += count;
        lut[i] = (sum as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Run CLAHE over a row-major 8-bit plane of `width * height` samples.
pub fn apply(gray: &[u8], width: usize, height: usize, params: &ClaheParams) -> Vec<u8> {
    let grid = params.tile_grid.max(1);
    if width == 0 || height == 0 {
        return gray.to_vec();
    }

    let tile_w = width.div_ceil(grid);
    let tile_h = height.div_ceil(grid);
    let tile_area = tile_w * tile_h;
    let clip = if params.clip_limit > 0.0 {
        ((params.clip_limit * tile_area as f32 / BINS as f32) as u32).max(1)
    } else {
        u32::MAX
    };

    let mut luts = vec![[0u8; BINS]; grid * grid];
    for ty in 0..grid {
        for tx in 0..grid {
            let mut hist = [0u32; BINS];
            for row in 0..tile_h {
                let y = reflect_101((ty * tile_h + row) as isize, height);
                for col in 0..tile_w {
                    let x = reflect_101((tx * tile_w + col) as isize, width);
                    hist[gray[y * width + x] as usize] += 1;
                }
            }
            if clip != u32::MAX {
                clip_histogram(&mut hist, clip);
            }
            luts[ty * grid + tx] = tile_lut(&hist, tile_area);
        }
    }

    let inv_tw = 1.0 / tile_w as f32;
    let inv_th = 1.0 / tile_h as f32;
    let last = grid as isize - 1;
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        let fy = y as f32 * inv_th - 0.5;
        let ty1 = fy.floor() as isize;
        let ya = fy - ty1 as f32;
        let ty2 = (ty1 + 1).min(last) as usize;
        let ty1 = ty1.max(0) as usize;

        for x in 0..width {
            let fx = x as f32 * inv_tw - 0.5;
            let tx1 = fx.floor() as isize;
            let xa = fx - tx1 as f32;
            let tx2 = (tx1 + 1).min(last) as usize;
            let tx1 = tx1.max(0) as usize;

            let v = gray[y * width + x] as usize;
            let top = luts[ty1 * grid + tx1][v] as f32 * (1.0 - xa)
                + luts[ty1 * grid + tx2][v] as f32 * xa;
            let bottom = luts[ty2 * grid + tx1][v] as f32 * (1.0 - xa)
                + luts[ty2 * grid + tx2][v] as f32 * xa;
            let blended = top * (1.0 - ya) + bottom * ya;
            out.push(blended.round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_stays_in_bounds() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(7, 1), 0);
        for i in -20..40 {
            assert!(reflect_101(i, 3) < 3);
        }
    }

    #[test]
    fn clipping_preserves_total_count() {
        let mut hist = [0u32; BINS];
        hist[10] = 1000;
        hist[200] = 24;
        clip_histogram(&mut hist, 8);
        assert_eq!(hist.iter().sum::<u32>(), 1024);
        assert!(hist.iter().all(|&c| c <= 8 + 1000 / BINS as u32 + 1));
    }

    #[test]
    fn preserves_dimensions() {
        let gray = vec![128u8; 80 * 60];
        let out = apply(&gray, 80, 60, &ClaheParams::default());
        assert_eq!(out.len(), 80 * 60);
    }

    #[test]
    fn uniform_plane_stays_uniform() {
        let gray = vec![90u8; 64 * 64];
        let out = apply(&gray, 64, 64, &ClaheParams::default());
        let first = out[0];
        assert!(out.iter().all(|&v| v == first));
    }

    #[test]
    fn tiny_image_smaller_than_grid() {
        let gray = vec![0, 50, 100, 150, 200, 250];
        let out = apply(&gray, 3, 2, &ClaheParams::default());
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn clip_limit_tempers_contrast_boost() {
        // Narrow band of values: unclipped equalization stretches it far
        // more than the clipped version.
        let gray: Vec<u8> = (0..64 * 64).map(|i| 120 + (i % 8) as u8).collect();
        let clipped = apply(&gray, 64, 64, &ClaheParams::default());
        let unclipped = apply(
            &gray,
            64,
            64,
            &ClaheParams {
                clip_limit: 0.0,
                ..ClaheParams::default()
            },
        );
        let spread = |v: &[u8]| v.iter().max().unwrap() - v.iter().min().unwrap();
        assert!(spread(&clipped) < spread(&unclipped));
    }

    #[test]
    fn empty_plane_is_returned_as_is() {
        assert!(apply(&[], 0, 0, &ClaheParams::default()).is_empty());
    }
}
