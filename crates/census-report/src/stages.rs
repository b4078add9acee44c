// File: crates/census-report/src/stages.rs
// Summary: The six chart stages. Each builds a Figure from a borrowed Dataset; rendering is separate.

use anyhow::{Context, Result};
use census_core::{top_n_by_population, zone_counts, Dataset};
use chart_core::palette::{self, GREEN, LIGHT_BLUE, LIGHT_GREEN, ORANGE, PAIRED, PURPLE, SALMON, SKY_BLUE};
use chart_core::{Axis, Chart, Figure, GridLines, RenderOptions, Series};

use crate::config::ReportConfig;

pub const HISTOGRAM_BINS: usize = 20;
pub const TOP_N: usize = 10;

pub struct Stage {
    pub id: &'static str,
    pub heading: &'static str,
    /// Figure size in pixels before `ReportConfig::scale`.
    pub size: (i32, i32),
    pub build: fn(&Dataset) -> Figure,
    pub caption: Option<&'static str>,
}

/// Fixed render order.
pub const STAGES: [Stage; 6] = [
    Stage {
        id: "population-bar",
        heading: "Popullsia e Komunave në Kosovë",
        size: (1200, 560),
        build: population_bar,
        caption: None,
    },
    Stage {
        id: "top10-pie",
        heading: "Top 10 Komunat me Popullsi më të Madhe",
        size: (800, 800),
        build: top_population_pie,
        caption: None,
    },
    Stage {
        id: "zone-split",
        heading: "Shpërndarja Urbane / Rurale",
        size: (1000, 500),
        build: zone_split,
        caption: None,
    },
    Stage {
        id: "density-histogram",
        heading: "Histogram i Dendësisë së Popullsisë",
        size: (800, 500),
        build: density_histogram,
        caption: None,
    },
    Stage {
        id: "area-population-scatter",
        heading: "Popullsia vs Sipërfaqja e Komunave",
        size: (800, 500),
        build: area_population_scatter,
        caption: None,
    },
    Stage {
        id: "female-youth-stacked",
        heading: "Krahasimi i Përqindjeve të Grave dhe të Rinjve në Komuna",
        size: (1400, 640),
        build: female_youth_stacked,
        caption: Some(
            "Shënim: lartësia e shtyllës mbledh dy përqindje me baza të ndryshme popullsie. \
             Shuma nuk është tregues demografik; lexoni secilin segment veçmas.",
        ),
    },
];

/// A rendered stage ready for placement on the page.
#[derive(Clone, Debug)]
pub struct ChartPanel {
    pub id: &'static str,
    pub heading: &'static str,
    pub caption: Option<&'static str>,
    pub width: i32,
    pub height: i32,
    pub png: Vec<u8>,
}

impl Stage {
    pub fn render(&self, ds: &Dataset, cfg: &ReportConfig) -> Result<ChartPanel> {
        let (width, height) = cfg.scaled(self.size);
        let mut opts = RenderOptions::sized(width, height);
        opts.theme = cfg.theme;
        let figure = (self.build)(ds);
        let png = figure
            .render_to_png_bytes(&opts)
            .with_context(|| format!("rendering chart `{}`", self.id))?;
        tracing::info!(stage = self.id, width, height, bytes = png.len(), "chart rendered");
        Ok(ChartPanel { id: self.id, heading: self.heading, caption: self.caption, width, height, png })
    }
}

fn names(ds: &Dataset) -> Vec<String> {
    ds.iter().map(|r| r.name.clone()).collect()
}

/// (1) Population per municipality, vertical labels.
pub fn population_bar(ds: &Dataset) -> Figure {
    let mut chart = Chart::new();
    chart.categories = names(ds);
    chart.label_rotation_deg = 90.0;
    chart.grid = GridLines::Horizontal;
    chart.add_series(Series::bars(ds.iter().map(|r| r.population as f64).collect()).with_color(SKY_BLUE));
    chart.autoscale_axes(0.05);
    chart.x_axis.label = "Komuna".into();
    chart.y_axis.label = "Popullsia".into();
    chart.into()
}

/// (2) Top ten by population as a pie, starting at 12 o'clock.
pub fn top_population_pie(ds: &Dataset) -> Figure {
    let top = top_n_by_population(ds, TOP_N);
    let mut chart = Chart::new();
    chart.categories = top.iter().map(|r| r.name.clone()).collect();
    chart.add_series(Series::pie(top.iter().map(|r| r.population as f64).collect(), 90.0).with_colors(&PAIRED));
    chart.into()
}

/// (3) Urban/rural counts as a pie and a bar chart side by side.
pub fn zone_split(ds: &Dataset) -> Figure {
    let counts = zone_counts(ds);
    let labels: Vec<String> = counts.iter().map(|(z, _)| z.label().to_string()).collect();
    let values: Vec<f64> = counts.iter().map(|&(_, n)| n as f64).collect();
    let colors = [GREEN, ORANGE];

    let mut pie = Chart::new();
    pie.title = Some("Pie Chart".into());
    pie.categories = labels.clone();
    pie.add_series(Series::pie(values.clone(), 0.0).with_colors(&colors));

    let mut bars = Chart::new();
    bars.title = Some("Bar Chart".into());
    bars.categories = labels;
    bars.add_series(Series::bars(values).with_colors(&colors));
    bars.autoscale_axes(0.05);
    bars.y_axis.label = "Numri i Komunave".into();

    Figure::row(vec![pie, bars])
}

/// (4) Distribution of density over fixed-count bins.
pub fn density_histogram(ds: &Dataset) -> Figure {
    let mut chart = Chart::new();
    chart.grid = GridLines::Horizontal;
    chart.add_series(
        Series::histogram(ds.iter().map(|r| r.density_per_km2).collect(), HISTOGRAM_BINS).with_color(LIGHT_GREEN),
    );
    chart.autoscale_axes(0.05);
    chart.x_axis.label = "Dendësia (banorë/km²)".into();
    chart.y_axis.label = "Numri i Komunave".into();
    chart.into()
}

/// (5) Area (x) against population (y).
pub fn area_population_scatter(ds: &Dataset) -> Figure {
    let mut chart = Chart::new();
    chart.grid = GridLines::Both;
    chart.add_series(Series::scatter(ds.iter().map(|r| (r.area_km2, r.population as f64)).collect()).with_color(PURPLE));
    chart.autoscale_axes(0.05);
    chart.x_axis = Axis::new("Sipërfaqja (km²)", chart.x_axis.min, chart.x_axis.max);
    chart.y_axis = Axis::new("Popullsia", chart.y_axis.min, chart.y_axis.max);
    chart.into()
}

/// (6) Female share with youth share stacked on top. The stack height is not a quantity.
pub fn female_youth_stacked(ds: &Dataset) -> Figure {
    let mut chart = Chart::new();
    chart.title = Some("Përqindjet e Grave dhe të Rinjve sipas Komunave".into());
    chart.categories = names(ds);
    chart.label_rotation_deg = 90.0;
    chart.legend = true;
    chart.add_series(
        Series::stacked(ds.iter().map(|r| r.female_percent).collect(), 0.6)
            .named("% Grave")
            .with_color(SALMON),
    );
    chart.add_series(
        Series::stacked(ds.iter().map(|r| r.youth_percent).collect(), 0.6)
            .named("% Të Rinjtë")
            .with_color(LIGHT_BLUE),
    );
    chart.autoscale_axes(0.05);
    chart.y_axis.label = "Përqindja".into();
    chart.into()
}

/// CSS color of the max/min highlight legend swatches, kept next to the chart colors.
pub fn highlight_colors() -> (String, String) {
    (palette::css_hex(LIGHT_GREEN), palette::css_hex(palette::LIGHT_CORAL))
}
