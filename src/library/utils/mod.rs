pub mod color;
pub mod img_ops;
