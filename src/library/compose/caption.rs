use std::convert::TryFrom;

use image::Rgb;
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};

use crate::library::{img_ops::RgbImgBuf, CaptionCfg, LibError};

/// Measures and draws caption text onto the canvas.
pub trait CaptionRenderer {
    /// Size in pixels of the box `text` occupies when drawn.
    fn measure(&self, text: &str) -> (u32, u32);

    /// Draw `text` with the top-left of its box at (x, y). Anything outside the canvas is clipped.
    fn draw(&self, canvas: &mut RgbImgBuf, x: i64, y: i64, text: &str);
}

pub struct FontCaptioner {
    font: Font<'static>,
    scale: Scale,
    color: Rgb<u8>,
}

impl FontCaptioner {
    pub fn load(cfg: &CaptionCfg) -> Result<Self, LibError> {
        let bytes = std::fs::read(&cfg.font_path).map_err(|source| LibError::FontRead {
            path: cfg.font_path.clone(),
            source,
        })?;

        let font = Font::try_from_vec(bytes).ok_or_else(|| LibError::FontParse(cfg.font_path.clone()))?;

        Ok(Self {
            font,
            scale: Scale::uniform(cfg.font_size),
            color: cfg.color,
        })
    }
}

impl CaptionRenderer for FontCaptioner {
    fn measure(&self, text: &str) -> (u32, u32) {
        let v_metrics = self.font.v_metrics(self.scale);
        let height = (v_metrics.ascent - v_metrics.descent).ceil();

        //the end of the last glyph's advance, which includes kerning between glyphs
        let width = self
            .font
            .layout(text, self.scale, point(0.0, v_metrics.ascent))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil();

        (width.max(0.0) as u32, height.max(0.0) as u32)
    }

    fn draw(&self, canvas: &mut RgbImgBuf, x: i64, y: i64, text: &str) {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => draw_text_mut(canvas, self.color, x, y, self.scale, &self.font, text),
            _ => self.draw_clipped(canvas, x, y, text),
        }
    }
}

impl FontCaptioner {
    //draw_text_mut only takes unsigned offsets, this covers captions hanging off the left edge.
    fn draw_clipped(&self, canvas: &mut RgbImgBuf, x: i64, y: i64, text: &str) {
        let v_metrics = self.font.v_metrics(self.scale);
        let origin = point(x as f32, y as f32 + v_metrics.ascent);
        let (canvas_x, canvas_y) = canvas.dimensions();

        for glyph in self.font.layout(text, self.scale, origin) {
            let bb = match glyph.pixel_bounding_box() {
                Some(bb) => bb,
                None => continue,
            };

            glyph.draw(|gx, gy, coverage| {
                let px = i64::from(bb.min.x) + i64::from(gx);
                let py = i64::from(bb.min.y) + i64::from(gy);
                if px < 0 || py < 0 || px >= i64::from(canvas_x) || py >= i64::from(canvas_y) {
                    return;
                }

                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = imageproc::pixelops::interpolate(self.color, *pixel, coverage);
            });
        }
    }
}
