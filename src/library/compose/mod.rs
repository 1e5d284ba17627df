mod caption;
mod collage_builder;

pub use caption::{CaptionRenderer, FontCaptioner};
pub use collage_builder::build;
