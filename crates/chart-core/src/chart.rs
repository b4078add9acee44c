// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, autoscaling, and drawing of axes, grid, series and legend onto a Skia canvas.

use anyhow::Result;
use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::render::{self, RenderOptions};
use crate::scale::{BandScale, ValueScale};
use crate::series::{Series, SeriesType};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::TITLE_BAND;
use crate::Axis;

const TICK_SIZE: f32 = 11.0;
const AXIS_LABEL_SIZE: f32 = 13.0;
const TITLE_SIZE: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLines {
    None,
    Horizontal,
    Both,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    /// Labels for categorical series (bars, stacked bars, pie slices).
    pub categories: Vec<String>,
    /// Counter-clockwise rotation of category labels, in degrees (90 = vertical).
    pub label_rotation_deg: f32,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: GridLines,
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            categories: Vec::new(),
            label_rotation_deg: 0.0,
            series: Vec::new(),
            x_axis: Axis::unit(),
            y_axis: Axis::unit(),
            grid: GridLines::None,
            legend: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// True when any series is laid out on category bands.
    pub fn is_categorical(&self) -> bool {
        self.series.iter().any(|s| s.series_type.is_categorical())
    }

    /// Number of category bands.
    pub fn category_count(&self) -> usize {
        if !self.categories.is_empty() {
            return self.categories.len();
        }
        self.series
            .iter()
            .filter(|s| s.series_type.is_categorical())
            .map(|s| s.values.len())
            .max()
            .unwrap_or(0)
    }

    /// Check that categorical series line up with `categories`.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.categories.is_empty() {
            return Ok(());
        }
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type.is_categorical() && s.values.len() != self.categories.len() {
                return Err(ChartError::CategoryMismatch {
                    series: s.name.clone().unwrap_or_else(|| format!("#{i}")),
                    expected: self.categories.len(),
                    found: s.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Fit both axes to the data. `margin` pads each side by that fraction of the span;
    /// bar-like charts with non-negative data keep their zero baseline.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut zero_based = false;
        let mut stack_top: Vec<f64> = Vec::new();

        for s in &self.series {
            match s.series_type {
                SeriesType::Bar { .. } => {
                    zero_based = true;
                    for &v in &s.values {
                        y_min = y_min.min(v.min(0.0));
                        y_max = y_max.max(v.max(0.0));
                    }
                }
                SeriesType::StackedBar { .. } => {
                    zero_based = true;
                    if stack_top.len() < s.values.len() {
                        stack_top.resize(s.values.len(), 0.0);
                    }
                    for (i, &v) in s.values.iter().enumerate() {
                        stack_top[i] += v;
                    }
                }
                SeriesType::Histogram { .. } => {
                    zero_based = true;
                    let bins = s.bins();
                    if let (Some(first), Some(last)) = (bins.first(), bins.last()) {
                        x_min = x_min.min(first.lo);
                        x_max = x_max.max(last.hi);
                        y_min = y_min.min(0.0);
                        for b in &bins {
                            y_max = y_max.max(b.count as f64);
                        }
                    }
                }
                SeriesType::Scatter { .. } => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Pie { .. } => {}
            }
        }
        for &t in &stack_top {
            y_min = y_min.min(t.min(0.0));
            y_max = y_max.max(t.max(0.0));
        }

        if self.is_categorical() {
            let n = self.category_count().max(1);
            x_min = -0.5;
            x_max = n as f64 - 0.5;
        }

        if !x_min.is_finite() || !x_max.is_finite() { x_min = 0.0; x_max = 1.0; }
        if !y_min.is_finite() || !y_max.is_finite() { y_min = 0.0; y_max = 1.0; }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }

        let ym = (y_max - y_min) * margin;
        let xm = if self.is_categorical() { 0.0 } else { (x_max - x_min) * margin };
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = if zero_based && y_min >= 0.0 { 0.0 } else { y_min - ym };
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        render::encode_png(px, w, h)
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_bytes(output_png_path.as_ref(), &bytes)
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.validate()?;
        render::rasterize(opts, |canvas, frame, text| self.draw(canvas, frame, opts, text))
    }

    /// Draw into `frame` of an existing canvas. Used directly by multi-panel figures.
    pub fn draw(&self, canvas: &skia::Canvas, frame: RectI32, opts: &RenderOptions, text: &TextShaper) {
        let theme = &opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(frame.to_skia(), &bg);

        let mut area = frame;
        if let Some(title) = &self.title {
            if opts.draw_labels {
                let cx = (frame.left + frame.right) as f32 * 0.5;
                text.draw(canvas, title, cx, frame.top as f32 + 22.0, TITLE_SIZE, theme.title, Align::Center);
            }
            area.top = (area.top + TITLE_BAND as i32).min(area.bottom);
        }

        if let Some(pie) = self.series.iter().find(|s| matches!(s.series_type, SeriesType::Pie { .. })) {
            draw_pie(canvas, area, self, pie, opts, text);
            return;
        }

        let mut insets = opts.insets;
        if opts.draw_labels && self.is_categorical() && self.label_rotation_deg != 0.0 {
            let longest = self
                .categories
                .iter()
                .map(|c| text.measure_width(c, TICK_SIZE))
                .fold(0.0f32, f32::max);
            let extra = longest * self.label_rotation_deg.to_radians().sin().abs() + 12.0;
            let cap = (area.height() / 2).max(0) as f32;
            insets.bottom += extra.min(cap) as u32;
        }
        let plot = area.inset(&insets);
        if plot.width() < 2 || plot.height() < 2 {
            return;
        }

        let l = plot.left as f32;
        let r = plot.right as f32;
        let t = plot.top as f32;
        let b = plot.bottom as f32;
        let ys = ValueScale::new_linear(b, t, self.y_axis.min, self.y_axis.max);
        let xs = ValueScale::new_linear(l, r, self.x_axis.min, self.x_axis.max);
        let bands = BandScale::new(l, r, self.category_count());

        let y_step = nice_step(self.y_axis.max - self.y_axis.min, 6);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, 6);
        let x_step = nice_step(self.x_axis.max - self.x_axis.min, 8);
        let x_ticks = if self.is_categorical() { Vec::new() } else { nice_ticks(self.x_axis.min, self.x_axis.max, 8) };

        draw_grid(canvas, plot, theme, self.grid, &y_ticks, &ys, &x_ticks, &xs);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, false);
        let mut stack_bottom: Vec<f64> = vec![0.0; self.category_count()];
        for s in &self.series {
            match s.series_type {
                SeriesType::Bar { width } => draw_bar_series(canvas, &bands, &ys, s, width, None, theme),
                SeriesType::StackedBar { width } => {
                    draw_bar_series(canvas, &bands, &ys, s, width, Some(&stack_bottom), theme);
                    for (i, &v) in s.values.iter().enumerate() {
                        if let Some(slot) = stack_bottom.get_mut(i) { *slot += v; }
                    }
                }
                SeriesType::Histogram { .. } => draw_histogram_series(canvas, &xs, &ys, s, theme),
                SeriesType::Scatter { radius } => draw_scatter_series(canvas, &xs, &ys, s, radius, theme),
                SeriesType::Pie { .. } => {}
            }
        }
        canvas.restore();

        draw_axes(canvas, plot, theme);

        if opts.draw_labels {
            // Y ticks
            for &v in &y_ticks {
                let y = ys.to_px(v);
                text.draw(canvas, &format_tick(v, y_step), l - 6.0, y + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Align::Right);
            }
            // X ticks: category labels or numeric
            if self.is_categorical() {
                for (i, c) in self.categories.iter().enumerate() {
                    let x = bands.center(i);
                    if self.label_rotation_deg == 0.0 {
                        text.draw(canvas, c, x, b + 16.0, TICK_SIZE, theme.tick, Align::Center);
                    } else {
                        text.draw_rotated(canvas, c, x, b + 6.0, -self.label_rotation_deg, TICK_SIZE, theme.tick, Align::Right);
                    }
                }
            } else {
                for &v in &x_ticks {
                    text.draw(canvas, &format_tick(v, x_step), xs.to_px(v), b + 16.0, TICK_SIZE, theme.tick, Align::Center);
                }
            }
            // Axis titles
            let x_label_y = (area.bottom as f32 - 10.0).max(b + 30.0);
            text.draw(canvas, &self.x_axis.label, (l + r) * 0.5, x_label_y, AXIS_LABEL_SIZE, theme.axis_label, Align::Center);
            text.draw_rotated(
                canvas,
                &self.y_axis.label,
                area.left as f32 + 14.0,
                (t + b) * 0.5,
                -90.0,
                AXIS_LABEL_SIZE,
                theme.axis_label,
                Align::Center,
            );
            if self.legend {
                draw_legend(canvas, plot, self, theme, text);
            }
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    theme: &Theme,
    grid: GridLines,
    y_ticks: &[f64],
    ys: &ValueScale,
    x_ticks: &[f64],
    xs: &ValueScale,
) {
    if grid == GridLines::None {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[5.0, 4.0], 0.0));

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // horizontals
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
    // verticals
    if grid == GridLines::Both {
        for &v in x_ticks {
            let x = xs.to_px(v);
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    bands: &BandScale,
    ys: &ValueScale,
    series: &Series,
    width: f32,
    bottoms: Option<&[f64]>,
    theme: &Theme,
) {
    for (i, &v) in series.values.iter().enumerate() {
        if !v.is_finite() { continue; }
        let base = bottoms.and_then(|b| b.get(i).copied()).unwrap_or(0.0);
        let (x0, x1) = bands.bar_edges(i, width);
        let y0 = ys.to_px(base);
        let y1 = ys.to_px(base + v);
        let rect = skia::Rect::from_ltrb(x0, y0.min(y1), x1, y0.max(y1));
        canvas.draw_rect(rect, &fill_paint(series.color_at(i, theme.palette)));
    }
}

fn draw_histogram_series(canvas: &skia::Canvas, xs: &ValueScale, ys: &ValueScale, series: &Series, theme: &Theme) {
    let paint = fill_paint(series.color_at(0, theme.palette));
    let y0 = ys.to_px(0.0);
    for bin in series.bins() {
        if bin.count == 0 { continue; }
        let y1 = ys.to_px(bin.count as f64);
        let rect = skia::Rect::from_ltrb(xs.to_px(bin.lo), y1.min(y0), xs.to_px(bin.hi), y1.max(y0));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, xs: &ValueScale, ys: &ValueScale, series: &Series, radius: f32, theme: &Theme) {
    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        if !x.is_finite() || !y.is_finite() { continue; }
        canvas.draw_circle((xs.to_px(x), ys.to_px(y)), radius.max(0.5), &fill_paint(series.color_at(i, theme.palette)));
    }
}

fn draw_legend(canvas: &skia::Canvas, plot: RectI32, chart: &Chart, theme: &Theme, text: &TextShaper) {
    let entries: Vec<(&str, skia::Color)> = chart
        .series
        .iter()
        .filter_map(|s| s.name.as_deref().map(|n| (n, s.color_at(0, theme.palette))))
        .collect();
    if entries.is_empty() {
        return;
    }
    let row_h = 20.0f32;
    let text_w = entries.iter().map(|(n, _)| text.measure_width(n, TICK_SIZE)).fold(0.0f32, f32::max);
    let w = text_w + 40.0;
    let h = row_h * entries.len() as f32 + 8.0;
    let x0 = plot.right as f32 - w - 8.0;
    let y0 = plot.top as f32 + 8.0;

    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, w, h), &fill_paint(theme.legend_fill));
    let mut border = skia::Paint::default();
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.grid);
    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, w, h), &border);

    for (i, (name, color)) in entries.iter().enumerate() {
        let y = y0 + 4.0 + row_h * i as f32;
        canvas.draw_rect(skia::Rect::from_xywh(x0 + 8.0, y + 4.0, 16.0, 11.0), &fill_paint(*color));
        text.draw(canvas, name, x0 + 30.0, y + 14.0, TICK_SIZE, theme.axis_label, Align::Left);
    }
}

fn draw_pie(canvas: &skia::Canvas, area: RectI32, chart: &Chart, series: &Series, opts: &RenderOptions, text: &TextShaper) {
    let SeriesType::Pie { start_angle_deg } = series.series_type else { return };
    let theme = &opts.theme;
    let total: f64 = series.values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return;
    }
    let cx = (area.left + area.right) as f32 * 0.5;
    let cy = (area.top + area.bottom) as f32 * 0.5;
    // leave room for outside labels
    let radius = (area.width().min(area.height()) as f32 * 0.5 - 48.0).max(8.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.slice_edge);

    let mut angle = start_angle_deg;
    for (i, &v) in series.values.iter().enumerate() {
        if !v.is_finite() || v <= 0.0 { continue; }
        let frac = (v / total) as f32;
        let sweep = frac * 360.0;
        // Skia angles run clockwise on screen; negate for counter-clockwise slices
        canvas.draw_arc(oval, -angle, -sweep, true, &fill_paint(series.color_at(i, theme.palette)));
        canvas.draw_arc(oval, -angle, -sweep, true, &edge);

        if opts.draw_labels {
            let mid = (angle + sweep * 0.5).to_radians();
            let (c, s) = (mid.cos(), mid.sin());
            text.draw(
                canvas,
                &format!("{:.1}%", frac * 100.0),
                cx + radius * 0.6 * c,
                cy - radius * 0.6 * s + TICK_SIZE * 0.35,
                TICK_SIZE,
                theme.axis_label,
                Align::Center,
            );
            if let Some(label) = chart.categories.get(i) {
                let align = if c >= 0.0 { Align::Left } else { Align::Right };
                text.draw(
                    canvas,
                    label,
                    cx + radius * 1.1 * c,
                    cy - radius * 1.1 * s + TICK_SIZE * 0.35,
                    AXIS_LABEL_SIZE,
                    theme.axis_label,
                    align,
                );
            }
        }
        angle += sweep;
    }
}
