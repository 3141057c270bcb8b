//! Canvas: the owned raster target and its drawing primitives
//!
//! Wraps a tiny-skia pixmap with the handful of operations the slide
//! layouts need: solid and rounded fills, scaled bitmap draws with a
//! selectable blend mode, and baseline-anchored text. Each render call owns
//! exactly one canvas; nothing here is shared or reused.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use rusttype::{point, Scale};
use tiny_skia::{
    BlendMode, Color, FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, Rect as SkiaRect,
    Transform,
};

use crate::assets::Bitmap;
use crate::error::{Error, Result};
use crate::fonts::SlideFont;
use crate::render::geometry::{cover_fit, rounded_rect_path, Rect};
use crate::style::Rgba;

/// Blend mode for bitmap draws. Fills and text always composite
/// source-over; only the decorative mask multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    Multiply,
}

impl Blend {
    fn to_skia(self) -> BlendMode {
        match self {
            Blend::SourceOver => BlendMode::SourceOver,
            Blend::Multiply => BlendMode::Multiply,
        }
    }
}

/// An offscreen render target, transparent until drawn on.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ConfigError(format!(
                "canvas dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::RenderError(format!("cannot allocate a {}x{} canvas", width, height))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill an axis-aligned rectangle with a solid color (source-over).
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if let Some(skia_rect) = SkiaRect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            let paint = solid_paint(color);
            self.pixmap
                .fill_rect(skia_rect, &paint, Transform::identity(), None);
        }
    }

    /// Fill a rounded rectangle built from the shared corner-path routine.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            let paint = solid_paint(color);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Draw a bitmap scaled into `dest` with the given blend mode.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect, blend: Blend) {
        let sx = dest.width / bitmap.width() as f32;
        let sy = dest.height / bitmap.height() as f32;
        let transform = Transform::from_scale(sx, sy).post_translate(dest.x, dest.y);
        let paint = PixmapPaint {
            opacity: 1.0,
            blend_mode: blend.to_skia(),
            quality: FilterQuality::Bilinear,
        };
        self.pixmap
            .draw_pixmap(0, 0, bitmap.as_pixmap_ref(), &paint, transform, None);
    }

    /// Draw a bitmap so it covers `dest` without distortion, cropping the
    /// overflowing axis.
    pub fn draw_bitmap_cover(&mut self, bitmap: &Bitmap, dest: Rect) {
        let target = cover_fit(bitmap.width() as f32, bitmap.height() as f32, dest);
        self.draw_bitmap(bitmap, target, Blend::SourceOver);
    }

    /// Draw `text` with its baseline at (`x`, `baseline`), matching canvas
    /// `fillText` semantics.
    pub fn draw_text(
        &mut self,
        font: &SlideFont,
        px: f32,
        color: Rgba,
        x: f32,
        baseline: f32,
        text: &str,
    ) {
        let scale = Scale::uniform(px);
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let glyphs: Vec<_> = font.inner().layout(text, scale, point(x, baseline)).collect();
        let data = self.pixmap.data_mut();
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px_x = bb.min.x + gx as i32;
                    let px_y = bb.min.y + gy as i32;
                    if px_x < 0 || px_y < 0 || px_x >= width || px_y >= height {
                        return;
                    }
                    if coverage <= 0.0 {
                        return;
                    }
                    let idx = ((px_y * width + px_x) * 4) as usize;
                    blend_coverage(&mut data[idx..idx + 4], color, coverage);
                });
            }
        }
    }

    /// Draw `text` horizontally centered on `center_x`, baseline-anchored.
    pub fn draw_text_centered(
        &mut self,
        font: &SlideFont,
        px: f32,
        color: Rgba,
        center_x: f32,
        baseline: f32,
        text: &str,
    ) {
        let x = center_x - font.text_width(px, text) / 2.0;
        self.draw_text(font, px, color, x, baseline, text);
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        // The pixmap is premultiplied; PNG wants straight alpha
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let img = RgbaImage::from_raw(self.width(), self.height(), rgba)
            .ok_or_else(|| Error::EncodeError("pixel buffer size mismatch".to_string()))?;
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| Error::EncodeError(e.to_string()))?;
        Ok(buf)
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let px = self.pixmap.pixels()[(y * self.width() + x) as usize].demultiply();
        (px.red(), px.green(), px.blue(), px.alpha())
    }
}

fn solid_paint<'a>(color: Rgba) -> Paint<'a> {
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(color.r, color.g, color.b, color.a));
    paint.anti_alias = true;
    paint
}

// Source-over of a solid color scaled by glyph coverage, directly in
// premultiplied space.
fn blend_coverage(dst: &mut [u8], color: Rgba, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0) * (color.a as f32 / 255.0);
    let inv = 1.0 - a;
    dst[0] = (color.r as f32 * a + dst[0] as f32 * inv).round() as u8;
    dst[1] = (color.g as f32 * a + dst[1] as f32 * inv).round() as u8;
    dst[2] = (color.b as f32 * a + dst[2] as f32 * inv).round() as u8;
    dst[3] = (255.0 * a + dst[3] as f32 * inv).round() as u8;
}
