// File: crates/chart-core/src/series.rs
// Summary: Series model for bar, stacked bar, histogram, scatter and pie data.
// Notes:
// - Categorical series (Bar, StackedBar, Pie) hold one value per chart category in `values`.
// - Histogram holds raw samples in `values`; binning happens at render/autoscale time.
// - Scatter holds points in `data_xy`.

use crate::grid::{histogram_bins, Bin};
use crate::palette;
use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeriesType {
    /// One bar per category from zero; `width` is the fraction of the band.
    Bar { width: f32 },
    /// Like `Bar`, but stacked on top of earlier stacked series in the same chart.
    StackedBar { width: f32 },
    /// Equal-width bins over the sample range.
    Histogram { bins: usize },
    Scatter { radius: f32 },
    /// Slices in counter-clockwise order starting at `start_angle_deg` (0 = 3 o'clock).
    Pie { start_angle_deg: f32 },
}

impl SeriesType {
    pub const fn is_categorical(&self) -> bool {
        matches!(self, SeriesType::Bar { .. } | SeriesType::StackedBar { .. } | SeriesType::Pie { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    /// Legend entry; unnamed series are left out of the legend.
    pub name: Option<String>,
    pub values: Vec<f64>,          // used by Bar/StackedBar/Histogram/Pie
    pub data_xy: Vec<(f64, f64)>,  // used by Scatter
    /// Per-point colors (`0xRRGGBB`), cycled. Empty means the theme palette.
    pub colors: Vec<u32>,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, name: None, values: Vec::new(), data_xy: Vec::new(), colors: Vec::new() }
    }

    pub fn bars(values: Vec<f64>) -> Self {
        Self { values, ..Self::new(SeriesType::Bar { width: 0.8 }) }
    }

    pub fn stacked(values: Vec<f64>, width: f32) -> Self {
        Self { values, ..Self::new(SeriesType::StackedBar { width }) }
    }

    pub fn histogram(samples: Vec<f64>, bins: usize) -> Self {
        Self { values: samples, ..Self::new(SeriesType::Histogram { bins }) }
    }

    pub fn scatter(points: Vec<(f64, f64)>) -> Self {
        Self { data_xy: points, ..Self::new(SeriesType::Scatter { radius: 4.0 }) }
    }

    pub fn pie(values: Vec<f64>, start_angle_deg: f32) -> Self {
        Self { values, ..Self::new(SeriesType::Pie { start_angle_deg }) }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, hex: u32) -> Self {
        self.colors = vec![hex];
        self
    }

    pub fn with_colors(mut self, hexes: &[u32]) -> Self {
        self.colors = hexes.to_vec();
        self
    }

    /// Color of point `i`, falling back to `theme_palette`.
    pub fn color_at(&self, i: usize, theme_palette: &[u32]) -> skia::Color {
        if self.colors.is_empty() {
            palette::cycle(theme_palette, i)
        } else {
            palette::cycle(&self.colors, i)
        }
    }

    /// Bins for a Histogram series; empty for other types.
    pub fn bins(&self) -> Vec<Bin> {
        match self.series_type {
            SeriesType::Histogram { bins } => histogram_bins(&self.values, bins),
            _ => Vec::new(),
        }
    }

    /// Number of points this series contributes.
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Scatter { .. } => self.data_xy.len(),
            _ => self.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
