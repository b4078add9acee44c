// File: crates/census-report/tests/stages.rs
// Purpose: Chart models built by each stage, checked before any pixels are drawn.

use census_core::{Dataset, DEFAULT_SEED};
use census_report::stages::{self, HISTOGRAM_BINS, STAGES};
use chart_core::{GridLines, SeriesType};

fn dataset() -> Dataset {
    Dataset::kosovo(DEFAULT_SEED).unwrap()
}

#[test]
fn stages_have_fixed_order_and_unique_ids() {
    let ids: Vec<_> = STAGES.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        [
            "population-bar",
            "top10-pie",
            "zone-split",
            "density-histogram",
            "area-population-scatter",
            "female-youth-stacked",
        ]
    );
    assert!(STAGES.iter().all(|s| s.size.0 > 0 && s.size.1 > 0));
    assert_eq!(STAGES.iter().filter(|s| s.caption.is_some()).count(), 1);
    assert!(STAGES[5].caption.is_some());
}

#[test]
fn population_bar_has_one_bar_per_municipality() {
    let ds = dataset();
    let fig = stages::population_bar(&ds);
    assert_eq!(fig.panels.len(), 1);
    let chart = &fig.panels[0];
    assert_eq!(chart.categories.len(), 38);
    assert_eq!(chart.categories[0], "Prishtinë");
    assert_eq!(chart.label_rotation_deg, 90.0);
    assert_eq!(chart.grid, GridLines::Horizontal);
    assert_eq!(chart.series[0].values[0], 227466.0);
    assert!(chart.y_axis.max >= 227466.0);
    assert!(chart.validate().is_ok());
}

#[test]
fn top_pie_lists_ten_largest_descending() {
    let ds = dataset();
    let fig = stages::top_population_pie(&ds);
    let chart = &fig.panels[0];
    assert_eq!(
        chart.categories,
        ["Prishtinë", "Prizren", "Ferizaj", "Pejë", "Gjilan", "Gjakovë", "Podujevë", "Mitrovicë", "Vushtrri", "Suharekë"]
    );
    let values = &chart.series[0].values;
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(chart.series[0].series_type, SeriesType::Pie { start_angle_deg: 90.0 });
    assert_eq!(chart.series[0].colors.len(), 12);
}

#[test]
fn zone_split_pairs_pie_and_bars_with_same_counts() {
    let ds = dataset();
    let fig = stages::zone_split(&ds);
    assert_eq!(fig.panels.len(), 2);
    let (pie, bars) = (&fig.panels[0], &fig.panels[1]);
    assert_eq!(pie.categories, ["Rurale", "Urbane"]);
    assert_eq!(bars.categories, pie.categories);
    assert_eq!(pie.series[0].values, vec![31.0, 7.0]);
    assert_eq!(bars.series[0].values, vec![31.0, 7.0]);
    assert_eq!(pie.series[0].series_type, SeriesType::Pie { start_angle_deg: 0.0 });
    assert_eq!(pie.title.as_deref(), Some("Pie Chart"));
    assert_eq!(bars.title.as_deref(), Some("Bar Chart"));
}

#[test]
fn density_histogram_bins_cover_every_municipality() {
    let ds = dataset();
    let fig = stages::density_histogram(&ds);
    let series = &fig.panels[0].series[0];
    let bins = series.bins();
    assert_eq!(bins.len(), HISTOGRAM_BINS);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 38);
    assert!((bins[0].lo - 3.9).abs() < 1e-9);
    assert!((bins[HISTOGRAM_BINS - 1].hi - 841.8).abs() < 1e-9);
}

#[test]
fn scatter_pairs_area_with_population() {
    let ds = dataset();
    let fig = stages::area_population_scatter(&ds);
    let chart = &fig.panels[0];
    let points = &chart.series[0].data_xy;
    assert_eq!(points.len(), 38);
    assert_eq!(points[0], (572.0, 227466.0));
    assert_eq!(chart.grid, GridLines::Both);
    assert!(!chart.is_categorical());
}

#[test]
fn stacked_chart_puts_youth_on_top_of_female() {
    let ds = dataset();
    let fig = stages::female_youth_stacked(&ds);
    let chart = &fig.panels[0];
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name.as_deref(), Some("% Grave"));
    assert_eq!(chart.series[1].name.as_deref(), Some("% Të Rinjtë"));
    assert!(chart.series.iter().all(|s| s.series_type == SeriesType::StackedBar { width: 0.6 }));
    assert!(chart.legend);
    let tallest = ds.iter().map(|r| r.female_percent + r.youth_percent).fold(f64::MIN, f64::max);
    assert!(chart.y_axis.max >= tallest);
}
