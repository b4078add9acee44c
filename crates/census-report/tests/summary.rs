// File: crates/census-report/tests/summary.rs
// Purpose: Terminal summary tables for the default dataset and a single-zone one.

use census_core::{Dataset, DatasetBuilder, MunicipalityColumns, DEFAULT_SEED};
use census_report::render_summary;

#[test]
fn summary_lists_rows_ranks_and_means() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let text = render_summary(&ds, true);
    for name in ["Prishtinë", "Zveçan", "Hani i Elezit"] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("227,466"));
    assert!(text.contains("Rangu"));
    assert!(text.contains("124,675"));
    assert!(text.contains("25,742"));
    assert!(text.contains("count"));
    assert!(text.contains("75%"));
}

#[test]
fn single_zone_dataset_reports_missing_mean() {
    let names = ["Alfa", "Beta"];
    let populations = [1200, 800];
    let areas = [10.0, 20.0];
    let zones = ["Rurale", "Rurale"];
    let columns = MunicipalityColumns { names: &names, populations: &populations, areas_km2: &areas, zones: &zones };
    let ds = DatasetBuilder::new(columns).seed(3).build().unwrap();
    let text = render_summary(&ds, true);
    assert!(text.contains("(Urbane): pa të dhëna"));
    assert!(text.contains("(Rurale): 1,000"));
}
