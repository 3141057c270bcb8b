//! Slide composition pipeline
//!
//! Orchestrates one render: fetch the background, place it cover-fit, blend
//! the decorative mask multiplicatively (skipping it with a warning when the
//! asset is missing), draw the overlay variant selected by the slide index,
//! and encode the result as PNG.

pub mod geometry;
pub mod layout;
pub mod paint;

use base64::Engine as Base64Engine;
use log::warn;
use url::Url;

use crate::assets::AssetLoader;
use crate::error::{Error, Result};
use crate::fonts::SlideFont;
use crate::render::geometry::Rect;
use crate::render::layout::LayoutKind;
use crate::render::paint::{Blend, Canvas};
use crate::style;
use crate::{Property, RendererConfig};

/// A composed slide image.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl SlideImage {
    /// Serialize as a `data:image/png;base64,...` URI, directly usable as an
    /// image source.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }
}

/// Renders promotional slides for listing properties.
///
/// The renderer holds no mutable state: concurrent `render` calls are
/// independent, each owning its canvas and issuing its own asset fetches.
pub struct SlideRenderer {
    loader: AssetLoader,
    asset_base: Url,
    config: RendererConfig,
}

impl SlideRenderer {
    pub fn new(config: RendererConfig) -> Result<Self> {
        let mut asset_base = Url::parse(&config.asset_base).map_err(|e| {
            Error::ConfigError(format!("invalid asset base '{}': {}", config.asset_base, e))
        })?;
        if !asset_base.path().ends_with('/') {
            let path = format!("{}/", asset_base.path());
            asset_base.set_path(&path);
        }
        let loader = AssetLoader::new(&config)?;
        Ok(Self {
            loader,
            asset_base,
            config,
        })
    }

    /// Render one slide at the configured viewport size.
    pub async fn render(
        &self,
        image_url: &str,
        slide_index: usize,
        property: &Property,
    ) -> Result<SlideImage> {
        let viewport = self.config.viewport;
        self.render_sized(image_url, slide_index, property, viewport.width, viewport.height)
            .await
    }

    /// Render one slide at an explicit size.
    pub async fn render_sized(
        &self,
        image_url: &str,
        slide_index: usize,
        property: &Property,
        width: u32,
        height: u32,
    ) -> Result<SlideImage> {
        // Background first: its failure fails the whole render, before any
        // canvas is observable
        let background = self.loader.fetch_image(image_url).await?;

        let mut canvas = Canvas::new(width, height)?;
        let full = Rect::new(0.0, 0.0, width as f32, height as f32);
        canvas.draw_bitmap_cover(&background, full);

        // Mask goes on before any overlay content. A missing or broken mask
        // degrades the slide, it never fails it.
        let mask_url = self.mask_url(slide_index)?;
        match self.loader.fetch_image(mask_url.as_str()).await {
            Ok(mask) => canvas.draw_bitmap(&mask, full, Blend::Multiply),
            Err(e) => warn!("Failed to load mask for slide {}: {}", slide_index + 1, e),
        }

        match LayoutKind::for_slide(slide_index) {
            LayoutKind::Cover => self.draw_cover(&mut canvas, property, full)?,
            LayoutKind::Closing => self.draw_closing(&mut canvas, property, full)?,
            LayoutKind::Photo => {}
        }

        let png_data = canvas.encode_png()?;
        Ok(SlideImage {
            width,
            height,
            png_data,
        })
    }

    fn mask_url(&self, slide_index: usize) -> Result<Url> {
        self.asset_base
            .join(&format!("mascaras/{}", layout::mask_filename(slide_index)))
            .map_err(|e| Error::ConfigError(format!("cannot build mask URL: {}", e)))
    }

    fn draw_cover(&self, canvas: &mut Canvas, property: &Property, full: Rect) -> Result<()> {
        let font = SlideFont::resolve(&self.config)?;
        let (width, height) = (full.width, full.height);

        canvas.fill_rect(layout::title_bar(width), style::TITLE_BAR_FILL);
        canvas.draw_text_centered(
            &font,
            style::TITLE_PX,
            style::TITLE_INK,
            width / 2.0,
            style::TITLE_BASELINE_Y,
            &layout::title_line(property),
        );

        let badge = layout::badge_box(width);
        canvas.fill_rect(badge, style::BOX_FILL);
        canvas.draw_text_centered(
            &font,
            style::BADGE_PX,
            style::LIGHT_INK,
            badge.center_x(),
            badge.y + style::BADGE_BASELINE_DY,
            &property.neighborhood,
        );

        let panel = layout::stats_panel(width, height);
        canvas.fill_rounded_rect(panel, style::STATS_RADIUS, style::PANEL_FILL);
        for (index, stat) in layout::stat_columns(property).iter().enumerate() {
            let center_x = layout::stat_column_center(panel, index);
            canvas.draw_text_centered(
                &font,
                style::STAT_LABEL_PX,
                style::TITLE_INK,
                center_x,
                panel.y + style::STAT_LABEL_BASELINE_DY,
                stat.label,
            );
            canvas.draw_text_centered(
                &font,
                style::STAT_VALUE_PX,
                style::TITLE_INK,
                center_x,
                panel.y + style::STAT_VALUE_BASELINE_DY,
                &stat.value,
            );
        }
        Ok(())
    }

    fn draw_closing(&self, canvas: &mut Canvas, property: &Property, full: Rect) -> Result<()> {
        let font = SlideFont::resolve(&self.config)?;

        let price_box = layout::closing_box(full.width, full.height);
        canvas.fill_rounded_rect(price_box, style::CLOSING_RADIUS, style::BOX_FILL);
        canvas.draw_text_centered(
            &font,
            style::TITLE_PX,
            style::LIGHT_INK,
            full.width / 2.0,
            price_box.y + style::CLOSING_TITLE_BASELINE_DY,
            &layout::title_line(property),
        );
        canvas.draw_text_centered(
            &font,
            style::PRICE_PX,
            style::LIGHT_INK,
            full.width / 2.0,
            price_box.y + style::CLOSING_PRICE_BASELINE_DY,
            &property.price,
        );
        Ok(())
    }
}

/// One-shot convenience: render a slide with a default-configured renderer
/// and return the PNG data URI.
pub async fn render_slide_image(
    image_url: &str,
    slide_index: usize,
    property: &Property,
) -> Result<String> {
    let renderer = SlideRenderer::new(RendererConfig::default())?;
    let slide = renderer.render(image_url, slide_index, property).await?;
    Ok(slide.to_data_uri())
}
