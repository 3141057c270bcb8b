//! Asset loading: HTTP fetch + decode into drawable bitmaps
//!
//! Every fetch is a fresh network round trip; the renderer deliberately
//! keeps no asset cache, so identical URLs are re-fetched on every call.

use std::time::Duration;

use tiny_skia::{IntSize, Pixmap, PixmapRef};

use crate::error::{Error, Result};
use crate::RendererConfig;

/// A decoded raster image, stored premultiplied so it can be drawn straight
/// onto a canvas.
pub struct Bitmap {
    pixmap: Pixmap,
}

impl Bitmap {
    /// Decode encoded image bytes (PNG, JPEG, ...) into a bitmap.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| Error::DecodeError(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut data = rgba.into_raw();

        // tiny-skia pixmaps hold premultiplied RGBA
        for px in data.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a < 255 {
                px[0] = (px[0] as u16 * a / 255) as u8;
                px[1] = (px[1] as u16 * a / 255) as u8;
                px[2] = (px[2] as u16 * a / 255) as u8;
            }
        }

        let size = IntSize::from_wh(width, height)
            .ok_or_else(|| Error::DecodeError("image has zero dimensions".to_string()))?;
        let pixmap = Pixmap::from_vec(data, size)
            .ok_or_else(|| Error::DecodeError("image dimensions out of range".to_string()))?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn as_pixmap_ref(&self) -> PixmapRef<'_> {
        self.pixmap.as_ref()
    }
}

/// Fetches raster assets over HTTP and decodes them.
pub struct AssetLoader {
    client: reqwest::Client,
}

impl AssetLoader {
    /// Build the loader's HTTP client from the renderer configuration.
    ///
    /// No request timeout is applied unless `timeout_ms` is set; a stalled
    /// background fetch stalls the whole render, and callers wanting a bound
    /// wrap the call externally.
    pub fn new(config: &RendererConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetch `url` and decode the body as a raster image.
    ///
    /// Transport errors, non-success statuses, and undecodable bodies all
    /// fail; how the caller treats the failure (fatal for the background,
    /// recovered for the mask) is the renderer's decision.
    pub async fn fetch_image(&self, url: &str) -> Result<Bitmap> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::LoadError(format!("GET {} failed: {}", url, e)))?;
        let response = response
            .error_for_status()
            .map_err(|e| Error::LoadError(format!("GET {} failed: {}", url, e)))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::LoadError(format!("Failed to read body of {}: {}", url, e)))?;
        Bitmap::decode(&bytes)
    }
}
