// Canvas defaults
pub const DEFAULT_BG_COLOR: &str = "#eeeeee";
pub const DEFAULT_BORDER_SIZE: u32 = 30;
pub const DEFAULT_SPACE_BETWEEN_IMAGES: u32 = 30;

// Caption defaults
pub const DEFAULT_CAPTION_COLOR: &str = "#000000";
pub const DEFAULT_CAPTION_FONT_SIZE: f32 = 60.0;
pub const DEFAULT_CAPTION_FONT: &str = "font/NotoSans-Regular.ttf";

pub const DEFAULT_OUTPUT_PATH: &str = "output.jpeg";
