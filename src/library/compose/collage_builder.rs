use crate::library::{
    img_ops::{blank_canvas, paste, RgbImgBuf},
    layout::plan_layout,
    CollageCfg, ImageDescriptor, LibError,
};

use super::CaptionRenderer;

/// Compose all images into a single canvas, left to right.
///
/// Captions are drawn iff `captioner` is given; the descriptors should have been probed
/// with the same captioner so that the caption band is sized correctly.
/// Nothing is written to disk: saving the result is up to the caller.
pub fn build(
    images: &[ImageDescriptor],
    cfg: &CollageCfg,
    captioner: Option<&dyn CaptionRenderer>,
) -> Result<RgbImgBuf, LibError> {
    let layout = plan_layout(images, cfg.border, cfg.spacing, captioner.is_some())?;
    let mut canvas = blank_canvas(layout.width, layout.height, cfg.background);

    debug!(
        target: "collage_builder",
        "Canvas is {}x{} for {} images", layout.width, layout.height, images.len()
    );

    for (descriptor, placement) in images.iter().zip(layout.placements.iter()) {
        // Only one decoded image is held at a time.
        let img = image::open(&descriptor.src_path)
            .map_err(|source| LibError::ImageOpen {
                path: descriptor.src_path.clone(),
                source,
            })?
            .into_rgb8();

        let expected = (descriptor.width, descriptor.height);
        if img.dimensions() != expected {
            return Err(LibError::DimensionMismatch {
                path: descriptor.src_path.clone(),
                expected,
                found: img.dimensions(),
            });
        }

        debug!(
            target: "collage_builder",
            "Pasting {} at ({}, {})",
            descriptor.src_path.display(),
            placement.image_x,
            placement.image_y
        );
        paste(&mut canvas, &img, placement.image_x, placement.image_y)?;

        if let (Some(captioner), Some(caption)) = (captioner, &placement.caption) {
            if caption.text.is_empty() {
                continue;
            }

            let overhangs_left = caption.x < 0;
            let overhangs_right = caption.x + i64::from(descriptor.caption_width) > i64::from(layout.width);
            if overhangs_left || overhangs_right {
                warn!(
                    "Caption \"{}\" is wider than the space available and will be clipped",
                    caption.text
                );
            } else if descriptor.caption_width > descriptor.width {
                warn!("Caption \"{}\" is wider than its image", caption.text);
            }

            debug!(
                target: "collage_builder",
                "Drawing caption \"{}\" at ({}, {})", caption.text, caption.x, caption.y
            );
            captioner.draw(&mut canvas, caption.x, caption.y, &caption.text);
        }
    }

    Ok(canvas)
}
