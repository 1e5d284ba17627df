use std::path::PathBuf;

use thiserror::Error;

use crate::library::LibError;

#[derive(Error, Debug)]
pub enum AppError {
    /////////////////////////////////
    // Argument parsing
    #[error("{0}")]
    Clap(#[from] clap::Error),

    #[error("Args file not found at {0}")]
    ArgsFileNotFound(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse args file at given location: {0}: {1}")]
    ArgsFileParse(PathBuf, String),

    #[error("could not parse color given to {arg}: {value}")]
    ParseColor { arg: &'static str, value: String },

    #[error("could not parse number given to {arg}: {value}")]
    ParseNumber { arg: &'static str, value: String },

    /////////////////////////////////
    // Collage creation
    #[error(transparent)]
    Lib(#[from] LibError),

    #[error("Failed to save output image to {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write output image to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
