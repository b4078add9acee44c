// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figure; charts laid out left to right on one surface.

use anyhow::Result;

use crate::render::{self, RenderOptions};
use crate::Chart;

#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub panels: Vec<Chart>,
}

impl Figure {
    /// Panels side by side, each taking an equal share of the width.
    pub fn row(panels: Vec<Chart>) -> Self {
        Self { panels }
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        for p in &self.panels {
            p.validate()?;
        }
        render::rasterize(opts, |canvas, frame, text| {
            for (chart, cell) in self.panels.iter().zip(frame.split_columns(self.panels.len())) {
                chart.draw(canvas, cell, opts, text);
            }
        })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        render::encode_png(px, w, h)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_bytes(output_png_path.as_ref(), &bytes)
    }
}

impl From<Chart> for Figure {
    fn from(chart: Chart) -> Self {
        Self { panels: vec![chart] }
    }
}
