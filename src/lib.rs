//! Image Adjust Lab - library crate.
//!
//! Provides the image session, the adjustment pipeline and the display and
//! histogram helpers used by the desktop application.

pub mod adjust;
pub mod app;
pub mod buffer;
pub mod display;
pub mod error;
pub mod histogram;
pub mod histogram_display;
pub mod image_io;
pub mod pipeline;
pub mod session;
