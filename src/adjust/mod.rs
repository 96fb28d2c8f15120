//! Pure pixel transformations.
//!
//! Every function takes the source image by reference and returns a new
//! image; nothing here keeps state between calls.

pub mod clahe;
pub mod equalize;
pub mod grayscale;
pub mod hsv;
pub mod tone;
