//! Pure geometry helpers: cover-fit placement and rounded-rectangle paths

use tiny_skia::{Path, PathBuilder};

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center of the rectangle
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Compute the draw rectangle for "object-fit: cover" semantics.
///
/// The returned rectangle scales the source so it fully covers `dest`
/// without distortion: the overflowing axis is cropped symmetrically. A
/// narrower (taller) image matches the destination width and overflows
/// vertically; otherwise the height matches and the width overflows. Equal
/// aspect ratios degrade to an exact fit.
pub fn cover_fit(image_width: f32, image_height: f32, dest: Rect) -> Rect {
    let image_ratio = image_width / image_height;
    let cover_ratio = dest.width / dest.height;

    let mut render_width = dest.width;
    let mut render_height = dest.height;

    if image_ratio < cover_ratio {
        render_height = dest.width / image_ratio;
    } else {
        render_width = dest.height * image_ratio;
    }

    Rect {
        x: dest.x + (dest.width - render_width) / 2.0,
        y: dest.y + (dest.height - render_height) / 2.0,
        width: render_width,
        height: render_height,
    }
}

/// Build a closed rounded-rectangle path: four straight edges joined by
/// quadratic Bézier corner segments.
///
/// Shared by the stats panel and both boxed overlays. Returns `None` for
/// degenerate geometry (non-finite or non-positive extents).
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(src_w: f32, src_h: f32, dest: Rect) {
        let r = cover_fit(src_w, src_h, dest);
        assert!(
            r.width >= dest.width - 1e-3 && r.height >= dest.height - 1e-3,
            "cover rect {:?} does not cover {:?}",
            r,
            dest
        );
        // At least one axis fits exactly
        assert!(
            (r.width - dest.width).abs() < 1e-3 || (r.height - dest.height).abs() < 1e-3
        );
        // Centered on both axes
        assert!((r.x - (dest.x + (dest.width - r.width) / 2.0)).abs() < 1e-3);
        assert!((r.y - (dest.y + (dest.height - r.height) / 2.0)).abs() < 1e-3);
        // Aspect ratio preserved
        assert!((r.width / r.height - src_w / src_h).abs() < 1e-3);
    }

    #[test]
    fn cover_fit_tall_image_overflows_vertically() {
        let dest = Rect::new(0.0, 0.0, 800.0, 800.0);
        let r = cover_fit(400.0, 800.0, dest);
        assert_eq!(r.width, 800.0);
        assert_eq!(r.height, 1600.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, -400.0);
    }

    #[test]
    fn cover_fit_wide_image_overflows_horizontally() {
        let dest = Rect::new(0.0, 0.0, 800.0, 800.0);
        let r = cover_fit(1600.0, 800.0, dest);
        assert_eq!(r.height, 800.0);
        assert_eq!(r.width, 1600.0);
        assert_eq!(r.x, -400.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn cover_fit_equal_ratio_is_exact() {
        let dest = Rect::new(10.0, 20.0, 200.0, 100.0);
        let r = cover_fit(400.0, 200.0, dest);
        assert_eq!(r, Rect::new(10.0, 20.0, 200.0, 100.0));
    }

    #[test]
    fn cover_fit_holds_across_ratios() {
        let dest = Rect::new(0.0, 0.0, 640.0, 480.0);
        for (w, h) in [
            (100.0, 900.0),
            (900.0, 100.0),
            (333.0, 517.0),
            (640.0, 480.0),
            (1.0, 1.0),
        ] {
            assert_covers(w, h, dest);
        }
    }

    #[test]
    fn cover_fit_respects_offset_destination() {
        assert_covers(300.0, 500.0, Rect::new(50.0, 75.0, 400.0, 300.0));
    }

    #[test]
    fn rounded_rect_path_has_expected_bounds() {
        let path = rounded_rect_path(Rect::new(80.0, 640.0, 640.0, 80.0), 7.0)
            .expect("path built");
        let b = path.bounds();
        assert_eq!(b.left(), 80.0);
        assert_eq!(b.top(), 640.0);
        assert_eq!(b.right(), 720.0);
        assert_eq!(b.bottom(), 720.0);
    }

    #[test]
    fn rounded_rect_path_clamps_oversized_radius() {
        // Radius larger than half the box must not self-intersect
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 40.0, 20.0), 50.0)
            .expect("path built");
        assert_eq!(path.bounds().bottom(), 20.0);
    }

    #[test]
    fn rounded_rect_path_rejects_degenerate_box() {
        assert!(rounded_rect_path(Rect::new(0.0, 0.0, 0.0, 20.0), 5.0).is_none());
    }
}
