use std::{convert::TryFrom, path::PathBuf};

use serde::Serialize;

use crate::library::{ImageDescriptor, LibError};


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionPlacement {
    pub text: String,
    //can be negative when a caption is wider than its image and the image is near the left edge.
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub src_path: PathBuf,
    pub image_x: u32,
    pub image_y: u32,
    pub caption: Option<CaptionPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Returns the (width, height) of the canvas needed to hold all images in a single row.
///
/// The width is the sum of the image widths plus a border on both sides and `spacing`
/// between each adjacent pair. The height is the tallest image plus a border above and
/// below. With captions, the tallest caption and one more border are added underneath.
pub fn compute_size(
    images: &[ImageDescriptor],
    border: u32,
    spacing: u32,
    captions_enabled: bool,
) -> Result<(u32, u32), LibError> {
    if images.is_empty() {
        return Err(LibError::NoImages);
    }

    //Do the sums in u64 so that huge inputs are reported rather than wrapping.
    let border = u64::from(border);
    let num_gaps = images.len() as u64 - 1;

    let sum_x: u64 = images.iter().map(|img| u64::from(img.width)).sum();
    let max_y = images.iter().map(|img| img.height).max().unwrap_or(0);

    let dim_x = sum_x + 2 * border + num_gaps * u64::from(spacing);
    let mut dim_y = u64::from(max_y) + 2 * border;

    if captions_enabled {
        let max_caption_y = images.iter().map(|img| img.caption_height).max().unwrap_or(0);
        dim_y += u64::from(max_caption_y) + border;
    }

    let dim_x = u32::try_from(dim_x).map_err(|_| LibError::CanvasTooLarge)?;
    let dim_y = u32::try_from(dim_y).map_err(|_| LibError::CanvasTooLarge)?;

    Ok((dim_x, dim_y))
}

/// Work out where every image (and caption) goes on the canvas.
///
/// Images are top-aligned at `border` and laid out left to right. Captions are centered
/// horizontally under their image and pinned to the bottom border, so captions of images
/// with different heights share the same line.
pub fn plan_layout(
    images: &[ImageDescriptor],
    border: u32,
    spacing: u32,
    captions_enabled: bool,
) -> Result<Layout, LibError> {
    let (width, height) = compute_size(images, border, spacing, captions_enabled)?;

    let mut cursor_x = border;
    let mut placements = Vec::with_capacity(images.len());

    for img in images {
        let caption = if captions_enabled {
            Some(CaptionPlacement {
                text: img.caption_text.clone(),
                x: caption_x(cursor_x, img.width, img.caption_width),
                y: i64::from(height) - i64::from(img.caption_height) - i64::from(border),
            })
        } else {
            None
        };

        placements.push(Placement {
            src_path: img.src_path.clone(),
            image_x: cursor_x,
            image_y: border,
            caption,
        });

        //saturating only matters after the last image, where the cursor is no longer used.
        cursor_x = cursor_x.saturating_add(img.width).saturating_add(spacing);
    }

    Ok(Layout {
        width,
        height,
        placements,
    })
}

/// Left edge of a caption of `caption_width` centered under an image starting at `cursor_x`.
pub fn caption_x(cursor_x: u32, image_width: u32, caption_width: u32) -> i64 {
    i64::from(cursor_x) + (i64::from(image_width) - i64::from(caption_width)).div_euclid(2)
}
