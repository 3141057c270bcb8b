//! Font resolution for text overlays
//!
//! The slide typography wants bold Montserrat, but the family is an external
//! asset: when it is not installed the renderer substitutes any bold sans
//! face it can find, preserving sizes and weight. Resolution order: explicit
//! `font_path` override, system lookup of the configured family, common
//! sans-serif faces, finally any face the system database knows about.
//! Photo-only slides draw no text and never touch this module.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};
use crate::RendererConfig;

/// A resolved bold face usable for drawing and measuring overlay text.
pub struct SlideFont {
    font: Font<'static>,
}

impl SlideFont {
    /// Resolve the configured family to a concrete font.
    ///
    /// Fails only when no parseable face exists anywhere, which makes every
    /// text-bearing layout unrenderable.
    pub fn resolve(config: &RendererConfig) -> Result<Self> {
        if let Some(path) = &config.font_path {
            let data = std::fs::read(path).map_err(|e| {
                Error::FontError(format!("failed to read {}: {}", path.display(), e))
            })?;
            return Self::from_vec(data, 0);
        }

        let mut db = Database::new();
        db.load_system_fonts();

        let families = [
            Family::Name(&config.font_family),
            Family::SansSerif,
            Family::Name("DejaVu Sans"),
            Family::Name("Liberation Sans"),
            Family::Name("Noto Sans"),
            Family::Name("Arial"),
            Family::Name("Helvetica"),
        ];
        let query = Query {
            families: &families,
            weight: Weight::BOLD,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let id = db
            .query(&query)
            .or_else(|| db.faces().map(|face| face.id).next())
            .ok_or_else(|| {
                Error::FontError(format!(
                    "no usable face for '{}' and no system fonts available",
                    config.font_family
                ))
            })?;

        db.with_face_data(id, |data, index| Self::from_vec(data.to_vec(), index))
            .ok_or_else(|| Error::FontError("font face data unavailable".to_string()))?
    }

    fn from_vec(data: Vec<u8>, index: u32) -> Result<Self> {
        let font = Font::try_from_vec_and_index(data, index)
            .ok_or_else(|| Error::FontError("failed to parse font data".to_string()))?;
        Ok(Self { font })
    }

    /// Advance width of `text` at `px` pixels, used to center text the way
    /// the layouts expect (`x = center - width / 2`).
    pub fn text_width(&self, px: f32, text: &str) -> f32 {
        let scale = Scale::uniform(px);
        let mut width = 0.0f32;
        for glyph in self.font.layout(text, scale, point(0.0, 0.0)) {
            width = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
        }
        width
    }

    pub(crate) fn inner(&self) -> &Font<'static> {
        &self.font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_path_is_an_error() {
        let config = RendererConfig {
            font_path: Some("/nonexistent/font.ttf".into()),
            ..Default::default()
        };
        assert!(matches!(
            SlideFont::resolve(&config),
            Err(Error::FontError(_))
        ));
    }

    #[test]
    fn resolved_font_measures_text() {
        // Machines without any installed font cannot run this check
        let font = match SlideFont::resolve(&RendererConfig::default()) {
            Ok(f) => f,
            Err(_) => {
                eprintln!("no system fonts available; skipping");
                return;
            }
        };
        let one = font.text_width(28.0, "A");
        let two = font.text_width(28.0, "AB");
        assert!(one > 0.0);
        assert!(two > one);
        assert_eq!(font.text_width(28.0, ""), 0.0);
    }
}
