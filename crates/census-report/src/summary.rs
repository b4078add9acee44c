// File: crates/census-report/src/summary.rs
// Summary: Plain-text terminal summary of the dataset and its statistics (no charts).

use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};

use census_core::{
    describe, format_thousands, mean_population_by_zone, top_n_by_population, Dataset, NumericColumn, Zone,
};

use crate::stages::TOP_N;

/// Render the dataset, `describe()`, top-N and zone means as terminal tables.
pub fn render_summary(ds: &Dataset, no_color: bool) -> String {
    if ds.is_empty() {
        return "No municipalities.".to_string();
    }

    let mut out = String::new();
    out.push_str(&dataset_table(ds, no_color).to_string());
    out.push_str("\n\n");
    out.push_str(&describe_table(ds, no_color).to_string());
    out.push_str("\n\n");
    out.push_str(&top_table(ds, no_color).to_string());
    out.push_str("\n\n");
    for zone in Zone::ALL {
        out.push_str(&format!(
            "Mesatarja e popullsisë ({}): {}\n",
            zone.label(),
            mean_population_by_zone(ds, zone)
        ));
    }
    out
}

fn header(table: &mut Table, labels: &[&str], no_color: bool) {
    if no_color {
        table.set_header(labels.to_vec());
    } else {
        table.set_header(labels.iter().map(|l| Cell::new(l).fg(Color::Cyan)).collect::<Vec<_>>());
    }
}

fn num(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn dataset_table(ds: &Dataset, no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["#", "Komuna", "Popullsia", "km²", "Zona", "Dendësia", "% Grave", "% Të Rinjtë"], no_color);
    for r in ds {
        table.add_row(Row::from(vec![
            num(r.index.to_string()),
            Cell::new(&r.name),
            num(format_thousands(r.population as f64)),
            num(format!("{:.1}", r.area_km2)),
            Cell::new(r.zone.label()),
            num(format!("{:.1}", r.density_per_km2)),
            num(format!("{:.1}", r.female_percent)),
            num(format!("{:.1}", r.youth_percent)),
        ]));
    }
    table
}

fn describe_table(ds: &Dataset, no_color: bool) -> Table {
    let summary = describe(ds);
    let mut labels = vec![""];
    labels.extend(NumericColumn::ALL.iter().map(|c| c.header()));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &labels, no_color);
    let Some(first) = summary.columns.first() else {
        return table;
    };
    for (row, (label, _)) in first.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(label)];
        for c in &summary.columns {
            let text = match c.rows()[row].1 {
                Some(v) if row == 0 => format!("{v:.0}"),
                Some(v) => format!("{v:.2}"),
                None => "-".to_string(),
            };
            cells.push(num(text));
        }
        table.add_row(Row::from(cells));
    }
    table
}

fn top_table(ds: &Dataset, no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["Rangu", "Komuna", "Popullsia"], no_color);
    for (rank, r) in top_n_by_population(ds, TOP_N).into_iter().enumerate() {
        table.add_row(Row::from(vec![
            num((rank + 1).to_string()),
            Cell::new(&r.name),
            num(format_thousands(r.population as f64)),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_zone_means_and_top_municipality() {
        let ds = Dataset::kosovo(42).unwrap();
        let text = render_summary(&ds, true);
        assert!(text.contains("Prishtinë"));
        assert!(text.contains("Mesatarja e popullsisë (Urbane): 124,675"));
        assert!(text.contains("Mesatarja e popullsisë (Rurale): 25,742"));
        assert!(text.contains("Shtërpcë"));
    }
}
