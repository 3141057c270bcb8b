//! Named style constants shared by the slide layouts
//!
//! Both layout branches draw from this palette so a color or box tweak lands
//! in one place. Values mirror the listing brand sheet: dark blue ink on
//! light surfaces, royal blue boxes with white text, and an amber stats
//! panel.

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Dark blue ink used for the title and stat text (#1e3a8a)
pub const TITLE_INK: Rgba = Rgba::opaque(0x1e, 0x3a, 0x8a);

/// Royal blue fill for the neighborhood badge and the closing box (#1e40af)
pub const BOX_FILL: Rgba = Rgba::opaque(0x1e, 0x40, 0xaf);

/// Amber fill for the stats panel (#fbbf24)
pub const PANEL_FILL: Rgba = Rgba::opaque(0xfb, 0xbf, 0x24);

/// 90% white behind the cover title
pub const TITLE_BAR_FILL: Rgba = Rgba::with_alpha(255, 255, 255, 230);

/// White used for text on blue boxes
pub const LIGHT_INK: Rgba = Rgba::opaque(255, 255, 255);

/// Preferred font family; any bold sans face may substitute for it when the
/// family is not installed.
pub const FONT_FAMILY: &str = "Montserrat";

// Font sizes in pixels. Everything on a slide is bold.
pub const TITLE_PX: f32 = 28.0;
pub const BADGE_PX: f32 = 20.0;
pub const STAT_LABEL_PX: f32 = 16.0;
pub const STAT_VALUE_PX: f32 = 20.0;
pub const PRICE_PX: f32 = 36.0;

// Cover layout: title bar band and text baseline
pub const TITLE_BAR_Y: f32 = 40.0;
pub const TITLE_BAR_HEIGHT: f32 = 60.0;
pub const TITLE_BASELINE_Y: f32 = 80.0;

// Cover layout: neighborhood badge
pub const BADGE_WIDTH: f32 = 300.0;
pub const BADGE_HEIGHT: f32 = 40.0;
pub const BADGE_Y: f32 = 120.0;
pub const BADGE_BASELINE_DY: f32 = 28.0;

// Cover layout: stats panel
pub const STATS_SIDE_MARGIN: f32 = 80.0;
pub const STATS_HEIGHT: f32 = 80.0;
pub const STATS_BOTTOM_OFFSET: f32 = 160.0;
pub const STATS_RADIUS: f32 = 7.0;
pub const STATS_INNER_PAD: f32 = 20.0;
pub const STAT_LABEL_BASELINE_DY: f32 = 30.0;
pub const STAT_VALUE_BASELINE_DY: f32 = 60.0;

// Closing layout: price box
pub const CLOSING_WIDTH: f32 = 400.0;
pub const CLOSING_HEIGHT: f32 = 160.0;
pub const CLOSING_RADIUS: f32 = 10.0;
pub const CLOSING_BOTTOM_MARGIN: f32 = 80.0;
pub const CLOSING_TITLE_BASELINE_DY: f32 = 50.0;
pub const CLOSING_PRICE_BASELINE_DY: f32 = 110.0;
