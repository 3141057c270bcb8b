//! Slide layout selection and derived layout boxes
//!
//! The relationship between a slide index and what gets drawn is kept in two
//! explicit lookups: `LayoutKind::for_slide` picks the overlay variant and
//! `mask_filename` names the decorative mask asset. Everything else here is
//! stateless box arithmetic over the canvas dimensions.

use crate::render::geometry::Rect;
use crate::style;
use crate::Property;

/// Overlay variant for one slide position.
///
/// Only the first and fourth slides carry overlays; every other position is
/// a photo-only slide showing the masked background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Title bar, neighborhood badge, and stats panel (slide 0)
    Cover,
    /// Centered box with title and price (slide 3)
    Closing,
    /// Background and mask only
    Photo,
}

impl LayoutKind {
    pub fn for_slide(index: usize) -> Self {
        match index {
            0 => LayoutKind::Cover,
            3 => LayoutKind::Closing,
            _ => LayoutKind::Photo,
        }
    }
}

/// Mask asset filename for a slide: 1-based index, zero-padded to two
/// digits, PNG extension. Slide 0 maps to `01.png`.
pub fn mask_filename(index: usize) -> String {
    format!("{:02}.png", index + 1)
}

/// Title line shared by the cover and closing layouts
pub fn title_line(property: &Property) -> String {
    format!("{} - {}", property.property_type, property.reference)
}

/// One labeled column of the stats panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatColumn {
    pub label: &'static str,
    pub value: String,
}

/// The five stat columns of the cover layout, in display order. The area
/// carries an "m²" suffix; the counts render as plain integers.
pub fn stat_columns(property: &Property) -> Vec<StatColumn> {
    vec![
        StatColumn {
            label: "Área",
            value: format_area(property.area),
        },
        StatColumn {
            label: "Quartos",
            value: property.bedrooms.to_string(),
        },
        StatColumn {
            label: "Vagas",
            value: property.parking_spots.to_string(),
        },
        StatColumn {
            label: "Suítes",
            value: property.suites.to_string(),
        },
        StatColumn {
            label: "Banheiros",
            value: property.bathrooms.to_string(),
        },
    ]
}

// Whole areas print without a fractional part (85 → "85m²", 85.5 → "85.5m²")
fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{}m²", area as i64)
    } else {
        format!("{}m²", area)
    }
}

/// Full-width translucent band behind the cover title
pub fn title_bar(width: f32) -> Rect {
    Rect::new(0.0, style::TITLE_BAR_Y, width, style::TITLE_BAR_HEIGHT)
}

/// Neighborhood badge, horizontally centered below the title bar
pub fn badge_box(width: f32) -> Rect {
    Rect::new(
        (width - style::BADGE_WIDTH) / 2.0,
        style::BADGE_Y,
        style::BADGE_WIDTH,
        style::BADGE_HEIGHT,
    )
}

/// Rounded stats panel anchored near the bottom of the cover slide
pub fn stats_panel(width: f32, height: f32) -> Rect {
    Rect::new(
        style::STATS_SIDE_MARGIN,
        height - style::STATS_BOTTOM_OFFSET,
        width - 2.0 * style::STATS_SIDE_MARGIN,
        style::STATS_HEIGHT,
    )
}

/// Width of one stat column slot inside the panel
pub fn stat_column_width(panel: Rect) -> f32 {
    (panel.width - 2.0 * style::STATS_INNER_PAD) / 5.0
}

/// Center x of the `index`-th stat column
pub fn stat_column_center(panel: Rect, index: usize) -> f32 {
    let column = stat_column_width(panel);
    panel.x + style::STATS_INNER_PAD + column * index as f32 + column / 2.0
}

/// Centered price box of the closing slide, anchored above the bottom edge
pub fn closing_box(width: f32, height: f32) -> Rect {
    Rect::new(
        (width - style::CLOSING_WIDTH) / 2.0,
        height - style::CLOSING_HEIGHT - style::CLOSING_BOTTOM_MARGIN,
        style::CLOSING_WIDTH,
        style::CLOSING_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property() -> Property {
        Property {
            property_type: "Apartamento".to_string(),
            reference: "REF123".to_string(),
            neighborhood: "Centro".to_string(),
            area: 85.0,
            bedrooms: 3,
            parking_spots: 1,
            suites: 1,
            bathrooms: 2,
            price: "R$ 450.000".to_string(),
        }
    }

    #[test]
    fn layout_kind_maps_special_slides() {
        assert_eq!(LayoutKind::for_slide(0), LayoutKind::Cover);
        assert_eq!(LayoutKind::for_slide(3), LayoutKind::Closing);
        assert_eq!(LayoutKind::for_slide(1), LayoutKind::Photo);
        assert_eq!(LayoutKind::for_slide(2), LayoutKind::Photo);
        assert_eq!(LayoutKind::for_slide(7), LayoutKind::Photo);
    }

    #[test]
    fn mask_filename_is_one_based_and_padded() {
        assert_eq!(mask_filename(0), "01.png");
        assert_eq!(mask_filename(3), "04.png");
        assert_eq!(mask_filename(9), "10.png");
    }

    #[test]
    fn title_line_joins_type_and_reference() {
        assert_eq!(title_line(&sample_property()), "Apartamento - REF123");
    }

    #[test]
    fn stat_columns_format_area_with_suffix() {
        let stats = stat_columns(&sample_property());
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].label, "Área");
        assert_eq!(stats[0].value, "85m²");
        assert_eq!(stats[1].value, "3");
        assert_eq!(stats[2].value, "1");
        assert_eq!(stats[3].value, "1");
        assert_eq!(stats[4].value, "2");
    }

    #[test]
    fn fractional_area_keeps_its_fraction() {
        let mut p = sample_property();
        p.area = 85.5;
        assert_eq!(stat_columns(&p)[0].value, "85.5m²");
    }

    #[test]
    fn boxes_follow_canvas_dimensions() {
        let badge = badge_box(800.0);
        assert_eq!(badge.x, 250.0);
        assert_eq!(badge.y, 120.0);

        let panel = stats_panel(800.0, 800.0);
        assert_eq!(panel, Rect::new(80.0, 640.0, 640.0, 80.0));
        assert_eq!(stat_column_width(panel), 120.0);
        assert_eq!(stat_column_center(panel, 0), 160.0);
        assert_eq!(stat_column_center(panel, 4), 640.0);

        let closing = closing_box(800.0, 800.0);
        assert_eq!(closing, Rect::new(200.0, 560.0, 400.0, 160.0));
    }
}
