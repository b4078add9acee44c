// File: crates/census-report/tests/page.rs
// Purpose: End-to-end report build: every chart embedded, sections in order, statistics on the page.

use base64::Engine as _;
use census_core::{Dataset, DEFAULT_SEED};
use census_report::{render_html, Report, ReportConfig};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const DATA_URI: &str = "data:image/png;base64,";

fn small_config() -> ReportConfig {
    ReportConfig { scale: 0.25, ..ReportConfig::default() }
}

#[test]
fn report_renders_six_decodable_charts() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let cfg = small_config();
    let report = Report::build(&ds, &cfg).unwrap();
    assert_eq!(report.panels.len(), 6);

    let html = render_html(&report);
    let uris: Vec<&str> = html.match_indices(DATA_URI).map(|(i, _)| &html[i + DATA_URI.len()..]).collect();
    assert_eq!(uris.len(), 6);
    for rest in uris {
        let end = rest.find('"').unwrap();
        let png = base64::engine::general_purpose::STANDARD.decode(&rest[..end]).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() > 0 && img.height() > 0);
    }
}

#[test]
fn panel_sizes_follow_scale() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let cfg = small_config();
    let report = Report::build(&ds, &cfg).unwrap();
    let pie = report.panel("top10-pie").unwrap();
    assert_eq!((pie.width, pie.height), (200, 200));
    let decoded = image::load_from_memory(&pie.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 200));
    assert!(report.panel("missing").is_none());
}

#[test]
fn sections_appear_in_page_order() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let cfg = small_config();
    let report = Report::build(&ds, &cfg).unwrap();
    let html = render_html(&report);

    let order = [
        "<header>",
        "id=\"dataset\"",
        "id=\"describe\"",
        "id=\"population-bar\"",
        "id=\"top10-pie\"",
        "id=\"zone-split\"",
        "id=\"density-histogram\"",
        "id=\"zone-means\"",
        "id=\"area-population-scatter\"",
        "id=\"highlight\"",
        "id=\"female-youth-stacked\"",
        "<footer>",
    ];
    let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}"))).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {positions:?}");
}

#[test]
fn page_shows_statistics_and_highlights() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let cfg = small_config();
    let report = Report::build(&ds, &cfg).unwrap();
    let html = render_html(&report);

    assert!(html.contains("<strong>124,675</strong>"));
    assert!(html.contains("<strong>25,742</strong>"));
    assert!(html.contains("Analiza e Popullsisë në Komunat e Kosovës"));
    assert!(html.contains("Arta Sllamniku"));
    assert!(html.contains("Mitrovicë e Veriut"));
    assert!(html.contains("class=\"num row-max\""));
    assert!(html.contains("class=\"num row-min\""));
    assert!(html.contains("class=\"caption\""));
    // 38 dataset rows plus 38 highlight rows, each closing its own <tr>.
    assert!(html.matches("</tr>").count() >= 76);
}

#[test]
fn custom_metadata_is_escaped() {
    let ds = Dataset::kosovo(DEFAULT_SEED).unwrap();
    let cfg = ReportConfig { title: "A <b>&</b> B".into(), ..small_config() };
    let report = Report::build(&ds, &cfg).unwrap();
    let html = render_html(&report);
    assert!(html.contains("A &lt;b&gt;&amp;&lt;/b&gt; B"));
    assert!(!html.contains("<b>&</b>"));
}
