use image::*;
use thiserror::Error;

pub type RgbImgBuf = ImageBuffer<Rgb<u8>, Vec<u8>>;

#[derive(Error, Debug, Clone)]
pub enum ImgOpsError {
    #[error("Image processing error: {0}")]
    ImgError(String),

    #[error("Image of size {img_x}x{img_y} does not fit in the canvas at ({x}, {y})")]
    OutOfBounds { img_x: u32, img_y: u32, x: u32, y: u32 },
}

impl From<image::ImageError> for ImgOpsError {
    fn from(e: image::ImageError) -> Self {
        Self::ImgError(e.to_string())
    }
}

pub fn blank_canvas(dim_x: u32, dim_y: u32, background: Rgb<u8>) -> RgbImgBuf {
    ImageBuffer::from_pixel(dim_x, dim_y, background)
}

//copy the whole of img into the canvas with its top-left corner at (x, y).
//Unlike a clipped overlay, the image must fit entirely.
pub fn paste(canvas: &mut RgbImgBuf, img: &RgbImgBuf, x: u32, y: u32) -> Result<(), ImgOpsError> {
    let (img_x, img_y) = img.dimensions();
    let (canvas_x, canvas_y) = canvas.dimensions();

    let fits_x = x.checked_add(img_x).map_or(false, |end| end <= canvas_x);
    let fits_y = y.checked_add(img_y).map_or(false, |end| end <= canvas_y);
    if !(fits_x && fits_y) {
        return Err(ImgOpsError::OutOfBounds { img_x, img_y, x, y });
    }

    canvas.copy_from(img, x, y)?;
    Ok(())
}
