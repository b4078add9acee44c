// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale across bar, stacked, histogram and scatter series.

use chart_core::{Chart, Series};

#[test]
fn bars_keep_zero_baseline() {
    let mut chart = Chart::new();
    chart.add_series(Series::bars(vec![10.0, 40.0, 20.0]));
    chart.autoscale_axes(0.05);
    assert_eq!(chart.y_axis.min, 0.0);
    assert!((chart.y_axis.max - 42.0).abs() < 1e-9);
    // categorical X spans the bands
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-0.5, 2.5));
}

#[test]
fn stacked_bars_scale_to_stack_top() {
    let mut chart = Chart::new();
    chart.add_series(Series::stacked(vec![50.0, 48.0], 0.6));
    chart.add_series(Series::stacked(vec![30.0, 35.0], 0.6));
    chart.autoscale_axes(0.0);
    assert_eq!(chart.y_axis.min, 0.0);
    assert_eq!(chart.y_axis.max, 83.0);
}

#[test]
fn histogram_spans_bins_and_counts() {
    let mut chart = Chart::new();
    chart.add_series(Series::histogram(vec![0.0, 1.0, 1.0, 1.0, 4.0], 4));
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 4.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 3.0));
}

#[test]
fn scatter_is_padded_on_both_axes() {
    let mut chart = Chart::new();
    chart.add_series(Series::scatter(vec![(0.0, 1.0), (10.0, 3.0)]));
    chart.autoscale_axes(0.1);
    assert!((chart.x_axis.min - -1.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 11.0).abs() < 1e-9);
    assert!(chart.y_axis.min < 1.0 && chart.y_axis.max > 3.0);
}

#[test]
fn empty_chart_falls_back_to_unit_range() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.05);
    assert_eq!(chart.x_axis.min, 0.0);
    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
