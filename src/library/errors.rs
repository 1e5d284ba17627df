use std::path::PathBuf;

use thiserror::Error;

use super::img_ops::ImgOpsError;

#[derive(Error, Debug)]
pub enum LibError {
    #[error("At least one image required")]
    NoImages,

    #[error("Output canvas would be too large")]
    CanvasTooLarge,

    #[error("Failed to open image: {path}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image changed while building collage: {path} (expected {expected:?}, found {found:?})")]
    DimensionMismatch {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("Caption font not found at {path}. Choose a TrueType or OpenType font file with --caption-font")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Caption font could not be parsed: {0}. Choose a TrueType or OpenType font file with --caption-font")]
    FontParse(PathBuf),

    #[error(transparent)]
    ImgOps(#[from] ImgOpsError),
}
