//! The loaded image and its adjusted copy.
//!
//! `original` is set only by loading; `current` is rebuilt from `original`
//! by every adjustment, so adjustments never stack on each other.

use std::path::Path;

use web_time::Instant;

use crate::adjust::clahe::ClaheParams;
use crate::buffer::BgrImage;
use crate::error::LoadError;
use crate::image_io;
use crate::pipeline::Adjustment;

#[derive(Debug, Default, Clone)]
pub struct Session {
    original: Option<BgrImage>,
    current: Option<BgrImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and make it the new source image.
    ///
    /// On failure the previous images are kept.
    pub fn load(&mut self, path: &Path) -> Result<&BgrImage, LoadError> {
        let image = image_io::load_image(path)?;
        log::info!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(self.set_image(image))
    }

    /// Install an already decoded image as both source and current.
    pub fn set_image(&mut self, image: BgrImage) -> &BgrImage {
        self.current = Some(image.clone());
        self.original.insert(image)
    }

    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    pub fn original(&self) -> Option<&BgrImage> {
        self.original.as_ref()
    }

    pub fn current(&self) -> Option<&BgrImage> {
        self.current.as_ref()
    }

    /// Rebuild `current` from `original`. Returns `false` if nothing is loaded.
    pub fn apply(&mut self, adjustment: Adjustment) -> bool {
        let Some(original) = &self.original else {
            return false;
        };
        let start = Instant::now();
        self.current = Some(adjustment.apply(original));
        log::debug!(
            "Applied {} in {:.1}ms",
            adjustment.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        true
    }

    pub fn to_grayscale(&mut self) -> bool {
        self.apply(Adjustment::Grayscale)
    }

    pub fn equalize_linear(&mut self) -> bool {
        self.apply(Adjustment::EqualizeLinear)
    }

    pub fn equalize_adaptive(&mut self) -> bool {
        self.apply(Adjustment::EqualizeAdaptive(ClaheParams::default()))
    }

    pub fn set_brightness(&mut self, value: i32) -> bool {
        self.apply(Adjustment::Brightness(value))
    }

    pub fn set_contrast(&mut self, value: i32) -> bool {
        self.apply(Adjustment::Contrast(value))
    }

    pub fn set_saturation(&mut self, value: i32) -> bool {
        self.apply(Adjustment::Saturation(value))
    }

    /// Discard the current adjustment.
    pub fn reset(&mut self) -> bool {
        match &self.original {
            Some(original) => {
                self.current = Some(original.clone());
                true
            }
            None => false,
        }
    }
}
