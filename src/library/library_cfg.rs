use std::path::PathBuf;

use image::Rgb;

#[derive(Debug, Clone)]
pub struct CaptionCfg {
    pub color: Rgb<u8>,
    pub font_size: f32,
    pub font_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CollageCfg {
    pub background: Rgb<u8>,
    pub border: u32,
    pub spacing: u32,

    //captions are drawn iff this is present.
    pub caption: Option<CaptionCfg>,
}

impl CollageCfg {
    pub fn captions_enabled(&self) -> bool {
        self.caption.is_some()
    }
}
