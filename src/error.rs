//! Error types for image loading.
//!
//! Adjustments never fail; the only fallible operation in the application
//! is turning a file on disk into a [`BgrImage`](crate::buffer::BgrImage).

use std::path::PathBuf;

use thiserror::Error;

/// Reasons an image file could not become the session's source image.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The format is unsupported or the data is corrupt
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The file decoded to an image with no pixels
    #[error("{} contains no pixels", path.display())]
    Empty { path: PathBuf },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Decode { path, .. } | LoadError::Empty { path } => path,
        }
    }
}
