// File: crates/census-report/src/page.rs
// Summary: Self-contained HTML page: inline CSS, tables, and charts embedded as PNG data URIs.

use base64::Engine as _;
use census_core::{format_thousands, highlight_table, HighlightMark, NumericColumn};

use crate::report::Report;
use crate::stages::{highlight_colors, ChartPanel};

const INTRO: &str = "Ky projekt përdor të dhëna për 38 komuna në Kosovë dhe analizon popullsinë, sipërfaqen, \
dendësinë e popullsisë, përqindjen e të rinjve, përqindjen e grave dhe zonën (urbane/rurale). \
Qëllimi është të kuptohen karakteristikat demografike dhe shpërndarja e popullsisë në nivel komunal.";

const CONCLUSION: &str = "Ky projekt paraqet një analizë të detajuar demografike për 38 komunat e Kosovës. \
Janë paraqitur statistika të përgjithshme, shpërndarja urbane/rurale, përqindjet e grave dhe të rinjve, \
si dhe vizualizime të dobishme për planifikim strategjik.";

/// Render the full report page.
pub fn render_html(report: &Report<'_>) -> String {
    let panels = &report.panels;
    let charts_before_means: String = panels.iter().take(4).map(render_panel).collect();
    let scatter: String = panels.iter().skip(4).take(1).map(render_panel).collect();
    let stacked: String = panels.iter().skip(5).map(render_panel).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="sq">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <main class="container">
        {header}
        {dataset}
        {describe}
        {charts_before_means}
        {zone_means}
        {scatter}
        {highlight}
        {stacked}
        {conclusion}
    </main>
</body>
</html>"#,
        title = escape_html(&report.config.title),
        css = inline_css(),
        header = render_header(report),
        dataset = render_dataset_table(report),
        describe = render_describe_table(report),
        charts_before_means = charts_before_means,
        zone_means = render_zone_means(report),
        scatter = scatter,
        highlight = render_highlight_table(report),
        stacked = stacked,
        conclusion = render_conclusion(),
    )
}

/// Minimal HTML escaping for text and attribute content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn render_header(report: &Report<'_>) -> String {
    let cfg = report.config;
    format!(
        r#"<header>
            <h1>{title}</h1>
            <p class="meta">Autore: {author}</p>
            <p class="meta">Data: {date}</p>
            <p>{intro}</p>
        </header>"#,
        title = escape_html(&cfg.title),
        author = escape_html(&cfg.author),
        date = escape_html(&cfg.date),
        intro = escape_html(INTRO),
    )
}

fn render_dataset_table(report: &Report<'_>) -> String {
    let rows: String = report
        .dataset
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}</td><td>{}</td>\
                 <td class=\"num\">{:.1}</td><td class=\"num\">{:.1}</td><td class=\"num\">{:.1}</td></tr>\n",
                r.index,
                escape_html(&r.name),
                format_thousands(r.population as f64),
                r.area_km2,
                r.zone.label(),
                r.density_per_km2,
                r.female_percent,
                r.youth_percent,
            )
        })
        .collect();
    format!(
        r#"<section id="dataset">
            <h2>Pamje e Dataset-it</h2>
            <table>
                <thead><tr><th>#</th><th>Lista e Komunave në Kosovë</th><th>{pop}</th><th>{area}</th>
                <th>Zona (Urbane / Rurale)</th><th>{density}</th><th>{female}</th><th>{youth}</th></tr></thead>
                <tbody>
{rows}                </tbody>
            </table>
        </section>"#,
        pop = escape_html(NumericColumn::Population.header()),
        area = escape_html(NumericColumn::Area.header()),
        density = escape_html(NumericColumn::Density.header()),
        female = escape_html(NumericColumn::FemalePercent.header()),
        youth = escape_html(NumericColumn::YouthPercent.header()),
        rows = rows,
    )
}

fn render_describe_table(report: &Report<'_>) -> String {
    let columns = &report.describe.columns;
    let head: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape_html(c.column.header())))
        .collect();
    let mut body = String::new();
    if let Some(first) = columns.first() {
        for (row, (label, _)) in first.rows().iter().enumerate() {
            body.push_str(&format!("<tr><th>{label}</th>"));
            for c in columns {
                let cell = match c.rows()[row].1 {
                    Some(v) if row == 0 => format!("{v:.0}"),
                    Some(v) => format!("{v:.2}"),
                    None => "–".to_string(),
                };
                body.push_str(&format!("<td class=\"num\">{cell}</td>"));
            }
            body.push_str("</tr>\n");
        }
    }
    format!(
        r#"<section id="describe">
            <h2>Statistikat Bazë të Datasetit</h2>
            <table>
                <thead><tr><th></th>{head}</tr></thead>
                <tbody>
{body}                </tbody>
            </table>
        </section>"#
    )
}

fn render_panel(panel: &ChartPanel) -> String {
    let data = base64::engine::general_purpose::STANDARD.encode(&panel.png);
    let caption = panel
        .caption
        .map(|c| format!("<p class=\"caption\">{}</p>", escape_html(c)))
        .unwrap_or_default();
    format!(
        r#"<section id="{id}" class="chart">
            <h2>{heading}</h2>
            <img src="data:image/png;base64,{data}" width="{w}" height="{h}" alt="{heading}">
            {caption}
        </section>
        "#,
        id = panel.id,
        heading = escape_html(panel.heading),
        data = data,
        w = panel.width,
        h = panel.height,
        caption = caption,
    )
}

fn render_zone_means(report: &Report<'_>) -> String {
    let lines: String = report
        .zone_means
        .iter()
        .map(|(zone, mean)| {
            format!(
                "<p>Mesatarja e popullsisë në komunat {}: <strong>{}</strong></p>\n",
                zone.label().to_lowercase(),
                escape_html(&mean.to_string()),
            )
        })
        .collect();
    format!(
        r#"<section id="zone-means">
            <h2>Mesatarja e Popullsisë</h2>
{lines}        </section>"#
    )
}

fn render_highlight_table(report: &Report<'_>) -> String {
    let rows: String = highlight_table(report.dataset)
        .iter()
        .map(|row| {
            let class = match row.mark {
                HighlightMark::Max => "num row-max",
                HighlightMark::Min => "num row-min",
                HighlightMark::Both => "num row-max row-min",
                HighlightMark::None => "num",
            };
            format!(
                "<tr><td>{}</td><td class=\"{class}\">{:.1}</td><td class=\"num\">{:.1}</td></tr>\n",
                escape_html(row.name),
                row.female_percent,
                row.youth_percent,
            )
        })
        .collect();
    format!(
        r#"<section id="highlight">
            <h2>Tabela me Përqindjet e Grave dhe të Rinjve</h2>
            <table>
                <thead><tr><th>Lista e Komunave në Kosovë</th><th>% Grave</th><th>% Të Rinjtë</th></tr></thead>
                <tbody>
{rows}                </tbody>
            </table>
            <p><span class="swatch row-max"></span><strong>E gjelbra</strong> tregon komunën me përqindjen më të lartë të grave</p>
            <p><span class="swatch row-min"></span><strong>E kuqja</strong> tregon komunën me përqindjen më të ulët të grave</p>
        </section>"#
    )
}

fn render_conclusion() -> String {
    format!(
        r#"<footer>
            <hr>
            <h2>Përfundim</h2>
            <p>{}</p>
        </footer>"#,
        escape_html(CONCLUSION)
    )
}

fn inline_css() -> String {
    let (max_color, min_color) = highlight_colors();
    format!(
        r#"
body {{ font-family: -apple-system, "Segoe UI", Roboto, "DejaVu Sans", sans-serif; margin: 0; background: #fafafa; color: #1f2328; }}
.container {{ max-width: 1480px; margin: 0 auto; padding: 24px; }}
h1 {{ margin-bottom: 4px; }}
.meta {{ margin: 2px 0; color: #57606a; }}
section {{ margin: 32px 0; }}
table {{ border-collapse: collapse; font-size: 14px; }}
th, td {{ border: 1px solid #d0d7de; padding: 4px 8px; }}
thead th {{ background: #f0f2f4; }}
td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
.chart img {{ max-width: 100%; height: auto; border: 1px solid #d0d7de; background: #fff; }}
.caption {{ font-size: 13px; color: #9a6700; background: #fff8c5; padding: 6px 10px; border-left: 3px solid #d4a72c; }}
.row-max {{ background: {max_color}; }}
.row-min {{ background: {min_color}; }}
.swatch {{ display: inline-block; width: 14px; height: 14px; margin-right: 6px; vertical-align: middle; }}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("Fushë Kosovë"), "Fushë Kosovë");
    }

    #[test]
    fn css_carries_highlight_colors() {
        let css = inline_css();
        assert!(css.contains(".row-max { background: #90ee90; }"));
        assert!(css.contains(".row-min { background: #f08080; }"));
    }
}
