// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests for every series type, in memory and to disk.

use chart_core::{Chart, Figure, GridLines, RenderOptions, Series};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn small_opts() -> RenderOptions {
    RenderOptions::sized(320, 240)
}

fn bar_chart() -> Chart {
    let mut chart = Chart::new();
    chart.categories = vec!["A".into(), "B".into(), "C".into()];
    chart.label_rotation_deg = 90.0;
    chart.grid = GridLines::Horizontal;
    chart.add_series(Series::bars(vec![3.0, 1.0, 2.0]).with_color(0x87CEEB));
    chart.autoscale_axes(0.05);
    chart
}

#[test]
fn render_smoke_png() {
    let chart = bar_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&small_opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&small_opts()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_SIGNATURE), "should be PNG header");
}

#[test]
fn every_series_type_renders() {
    let mut stacked = Chart::new();
    stacked.categories = vec!["x".into(), "y".into()];
    stacked.legend = true;
    stacked.add_series(Series::stacked(vec![50.0, 49.0], 0.6).named("base").with_color(0xFA8072));
    stacked.add_series(Series::stacked(vec![30.0, 28.0], 0.6).named("top").with_color(0xADD8E6));
    stacked.autoscale_axes(0.05);

    let mut hist = Chart::new();
    hist.add_series(Series::histogram(vec![1.0, 2.0, 2.5, 9.0], 20));
    hist.autoscale_axes(0.05);

    let mut scatter = Chart::new();
    scatter.grid = GridLines::Both;
    scatter.add_series(Series::scatter(vec![(1.0, 10.0), (4.0, 2.0), (7.0, 5.0)]));
    scatter.autoscale_axes(0.05);

    let mut pie = Chart::new();
    pie.title = Some("Pie".into());
    pie.categories = vec!["p".into(), "q".into()];
    pie.add_series(Series::pie(vec![3.0, 1.0], 90.0));

    for chart in [stacked, hist, scatter, pie] {
        let bytes = chart.render_to_png_bytes(&small_opts()).expect("render");
        assert!(bytes.starts_with(&PNG_SIGNATURE));
    }
}

#[test]
fn figure_renders_panels_side_by_side() {
    let mut pie = Chart::new();
    pie.categories = vec!["a".into(), "b".into()];
    pie.add_series(Series::pie(vec![31.0, 7.0], 0.0).with_colors(&[0x008000, 0xFFA500]));
    let figure = Figure::row(vec![pie, bar_chart()]);
    let opts = RenderOptions::sized(640, 240);
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba");
    assert_eq!((w, h), (640, 240));
    assert_eq!(px.len(), stride * h as usize);
    let bytes = figure.render_to_png_bytes(&opts).expect("png");
    assert!(bytes.starts_with(&PNG_SIGNATURE));
}

#[test]
fn mismatched_categories_fail() {
    let mut chart = Chart::new();
    chart.categories = vec!["only".into()];
    chart.add_series(Series::bars(vec![1.0, 2.0]).named("pop"));
    let err = chart.render_to_png_bytes(&small_opts()).unwrap_err();
    assert!(err.to_string().contains("`pop` has 2 values for 1 categories"), "{err}");
}

#[test]
fn zero_size_surface_fails() {
    let err = bar_chart().render_to_png_bytes(&RenderOptions::sized(0, 10)).unwrap_err();
    assert!(err.to_string().contains("invalid surface size"));
}
