use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{compose::CaptionRenderer, LibError};

/// Everything the layout needs to know about one input, gathered before any
/// pixel data is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDescriptor {
    pub src_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub caption_text: String,
    pub caption_width: u32,
    pub caption_height: u32,
}

impl ImageDescriptor {
    /// Read the image dimensions from the file header and, if a captioner is
    /// given, measure the caption that will be drawn for it.
    pub fn probe<P>(src_path: P, captioner: Option<&dyn CaptionRenderer>) -> Result<Self, LibError>
    where
        P: AsRef<Path>,
    {
        let src_path = src_path.as_ref();
        let (width, height) = image::image_dimensions(src_path).map_err(|source| LibError::ImageOpen {
            path: src_path.to_path_buf(),
            source,
        })?;

        let caption_text = caption_text(src_path);
        let (caption_width, caption_height) = match captioner {
            Some(captioner) => captioner.measure(&caption_text),
            None => (0, 0),
        };

        Ok(Self {
            src_path: src_path.to_path_buf(),
            width,
            height,
            caption_text,
            caption_width,
            caption_height,
        })
    }
}

//the caption is the filename without directory or extension.
pub fn caption_text(src_path: &Path) -> String {
    src_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
