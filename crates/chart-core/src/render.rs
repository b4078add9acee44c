// File: crates/chart-core/src/render.rs
// Summary: Headless rendering pipeline: Skia CPU raster surface -> RGBA8 readback -> PNG via `image`.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins between each panel's frame and its plot area.
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to keep snapshots independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

/// Run `draw` on a fresh raster surface and read back unpremultiplied RGBA8.
/// Returns (pixels, width, height, stride).
pub fn rasterize<F>(opts: &RenderOptions, draw: F) -> Result<(Vec<u8>, u32, u32, usize)>
where
    F: FnOnce(&skia::Canvas, RectI32, &TextShaper),
{
    if opts.width <= 0 || opts.height <= 0 {
        return Err(ChartError::InvalidSize { width: opts.width, height: opts.height }.into());
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(ChartError::Surface)?;

    let text = TextShaper::new();
    let frame = RectI32::from_ltwh(0, 0, opts.width, opts.height);
    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        draw(canvas, frame, &text);
    }

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::Readback.into());
    }
    tracing::trace!(width = opts.width, height = opts.height, "rasterized chart surface");
    Ok((pixels, opts.width as u32, opts.height as u32, stride))
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {width}x{height}"))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

/// Write bytes, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
