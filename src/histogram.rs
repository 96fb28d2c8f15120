use crate::buffer::BgrImage;

pub const BINS: usize = 256;

/// Per-channel intensity counts, in blue, green, red order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    pub channels: [[u32; BINS]; 3],
}

impl ChannelHistogram {
    pub fn compute(img: &BgrImage) -> Self {
        let mut channels = [[0u32; BINS]; 3];
        for pixel in img.pixels() {
            for (c, &v) in pixel.iter().enumerate() {
                channels[c][v as usize] += 1;
            }
        }
        Self { channels }
    }

    pub fn blue(&self) -> &[u32; BINS] {
        &self.channels[0]
    }

    pub fn green(&self) -> &[u32; BINS] {
        &self.channels[1]
    }

    pub fn red(&self) -> &[u32; BINS] {
        &self.channels[2]
    }

    /// Tallest bin across all channels.
    pub fn max_count(&self) -> u32 {
        self.channels
            .iter()
            .flat_map(|c| c.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Whether the histogram panel is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistogramVisibility {
    #[default]
    Hidden,
    Shown,
}

impl HistogramVisibility {
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    /// Apply a checkbox change. Returns whether the preview has to be
    /// redrawn, which only happens when an image is loaded.
    pub fn set_checked(&mut self, checked: bool, image_loaded: bool) -> bool {
        let next = Self::from_checked(checked);
        let changed = next != *self;
        *self = next;
        changed && image_loaded
    }
}

/// Histogram to draw next to `image`. Nothing is counted while hidden.
pub fn for_display(
    visibility: HistogramVisibility,
    image: Option<&BgrImage>,
) -> Option<ChannelHistogram> {
    if !visibility.is_shown() {
        return None;
    }
    image.map(ChannelHistogram::compute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_channel_independently() {
        let img = BgrImage::from_raw(2, 1, vec![0, 10, 255, 0, 20, 255]).unwrap();
        let hist = ChannelHistogram::compute(&img);
        assert_eq!(hist.blue()[0], 2);
        assert_eq!(hist.green()[10], 1);
        assert_eq!(hist.green()[20], 1);
        assert_eq!(hist.red()[255], 2);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn totals_match_pixel_count() {
        let img = BgrImage::from_pixel(7, 5, [3, 4, 5]);
        let hist = ChannelHistogram::compute(&img);
        for channel in &hist.channels {
            assert_eq!(channel.iter().sum::<u32>(), 35);
        }
    }

    #[test]
    fn toggle_redraws_only_with_an_image() {
        let mut v = HistogramVisibility::default();
        assert!(!v.is_shown());
        assert!(!v.set_checked(true, false));
        assert!(v.is_shown());
        assert!(v.set_checked(false, true));
        assert!(!v.is_shown());
        // Same state again is not a change.
        assert!(!v.set_checked(false, true));
    }

    #[test]
    fn hidden_panel_computes_nothing() {
        let img = BgrImage::from_pixel(3, 3, [1, 2, 3]);
        assert!(for_display(HistogramVisibility::Hidden, Some(&img)).is_none());
        assert!(for_display(HistogramVisibility::Shown, None).is_none());
        let hist = for_display(HistogramVisibility::Shown, Some(&img)).unwrap();
        assert_eq!(hist.blue()[1], 9);
    }
}
