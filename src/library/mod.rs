pub mod compose;
pub mod definitions;
pub mod errors;
mod image_descriptor;
pub mod layout;
mod library_cfg;
mod utils;

//exports
pub use compose::{build, CaptionRenderer, FontCaptioner};
pub use errors::LibError;
pub use image_descriptor::ImageDescriptor;
pub use layout::{compute_size, plan_layout, Layout};
pub use library_cfg::{CaptionCfg, CollageCfg};
pub use utils::color::parse_color;
pub(crate) use utils::img_ops;
