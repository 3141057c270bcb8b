//! Vitrine
//!
//! A promotional slide compositor for real-estate listings: it layers a
//! background photo, a decorative mask, and text/graphic overlays (title,
//! neighborhood badge, stat columns, price banner) onto a fixed-size canvas
//! and returns the result as an encoded PNG.
//!
//! # Features
//!
//! - **Cover-fit backgrounds**: photos fill the canvas without distortion
//! - **Layered masks**: decorative masks multiply over the photo, and a
//!   missing mask degrades the slide instead of failing it
//! - **Two overlay layouts**: a cover slide (title, badge, stats panel) and
//!   a closing slide (price box); every other position is photo-only
//!
//! # Example
//!
//! ```no_run
//! use vitrine::{Property, RendererConfig, SlideRenderer};
//!
//! # async fn run() -> vitrine::Result<()> {
//! let renderer = SlideRenderer::new(RendererConfig {
//!     asset_base: "https://listings.example.com".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let property = Property {
//!     property_type: "Apartamento".to_string(),
//!     reference: "REF123".to_string(),
//!     neighborhood: "Centro".to_string(),
//!     area: 85.0,
//!     bedrooms: 3,
//!     parking_spots: 1,
//!     suites: 1,
//!     bathrooms: 2,
//!     price: "R$ 450.000".to_string(),
//! };
//!
//! let slide = renderer
//!     .render("https://listings.example.com/photos/ref123.jpg", 0, &property)
//!     .await?;
//! let uri = slide.to_data_uri();
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod fonts;
pub mod render;
pub mod style;

// Re-export the renderer surface at the crate root for ergonomic use
pub use render::layout::LayoutKind;
pub use render::{render_slide_image, SlideImage, SlideRenderer};

/// Canvas dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/// Configuration for the slide renderer
///
/// The defaults match the production deployment: an 800x800 canvas, masks
/// served from the local asset host, and bold Montserrat for all text.
///
/// # Examples
///
/// ```
/// let cfg = vitrine::RendererConfig::default();
/// assert_eq!(cfg.viewport.width, 800);
/// assert!(cfg.timeout_ms.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Static asset root; mask assets are expected at
    /// `<asset_base>/mascaras/01.png` through `0N.png`
    pub asset_base: String,
    /// User agent string sent with asset fetches
    pub user_agent: String,
    /// Per-request timeout in milliseconds. `None` (the default) applies no
    /// bound: a stalled background fetch stalls the render until the caller
    /// cancels it externally.
    pub timeout_ms: Option<u64>,
    /// Canvas dimensions used by [`SlideRenderer::render`]
    pub viewport: Viewport,
    /// Preferred font family for overlay text
    pub font_family: String,
    /// Explicit font file overriding system font discovery
    pub font_path: Option<PathBuf>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            asset_base: "http://localhost:3000".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/115.0 Vitrine/0.1"
                .to_string(),
            timeout_ms: None,
            viewport: Viewport::default(),
            font_family: style::FONT_FAMILY.to_string(),
            font_path: None,
        }
    }
}

/// A real-estate listing as rendered onto a slide
///
/// Fields are drawn verbatim; no validation is performed. The serde names
/// match the camelCase listing records produced by the listing service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Kind of property, e.g. "Apartamento"
    #[serde(rename = "type")]
    pub property_type: String,
    /// Listing reference code
    pub reference: String,
    /// Neighborhood shown on the cover badge
    pub neighborhood: String,
    /// Usable area in square meters
    pub area: f64,
    pub bedrooms: u32,
    pub parking_spots: u32,
    pub suites: u32,
    pub bathrooms: u32,
    /// Pre-formatted price text, currency symbol included
    pub price: String,
}
