// File: crates/census-core/src/stats.rs
// Summary: Read-only descriptive statistics over a Dataset (describe, zone means, zone counts, top-N).

use std::fmt;

use crate::dataset::Dataset;
use crate::record::{MunicipalityRecord, NumericColumn, Zone};

/// Text shown in place of a statistic that has no rows to summarize.
pub const NO_DATA: &str = "pa të dhëna";

/// Summary of one numeric column. Every statistic is `None` for an empty column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub column: NumericColumn,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` below two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    pub fn from_values(column: NumericColumn, values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self { column, count, mean: None, std: None, min: None, q25: None, median: None, q75: None, max: None };
        }
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            Some((ss / (count - 1) as f64).sqrt())
        } else {
            None
        };
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            column,
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// Statistics in display order, paired with their row labels.
    pub fn rows(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear interpolation between closest ranks over an ascending slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// `describe()` over every numeric column of the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Describe {
    pub columns: Vec<ColumnSummary>,
}

impl Describe {
    pub fn column(&self, column: NumericColumn) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }
}

pub fn describe(ds: &Dataset) -> Describe {
    let columns = NumericColumn::ALL
        .iter()
        .map(|&col| {
            let values: Vec<f64> = ds.iter().map(|r| col.value(r)).collect();
            ColumnSummary::from_values(col, &values)
        })
        .collect();
    Describe { columns }
}

/// Mean population of one zone, or an explicit absence of data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneMean {
    Value { mean: f64, count: usize },
    NoData,
}

impl ZoneMean {
    pub fn value(&self) -> Option<f64> {
        match *self {
            ZoneMean::Value { mean, .. } => Some(mean),
            ZoneMean::NoData => None,
        }
    }
}

impl fmt::Display for ZoneMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ZoneMean::Value { mean, .. } => f.write_str(&format_thousands(mean)),
            ZoneMean::NoData => f.write_str(NO_DATA),
        }
    }
}

pub fn mean_population_by_zone(ds: &Dataset, zone: Zone) -> ZoneMean {
    let (sum, count) = ds
        .by_zone(zone)
        .fold((0u64, 0usize), |(s, n), r| (s + r.population as u64, n + 1));
    if count == 0 {
        return ZoneMean::NoData;
    }
    ZoneMean::Value { mean: sum as f64 / count as f64, count }
}

/// Count per zone, descending by count; ties keep `Zone::ALL` order. Zones with no rows are omitted.
pub fn zone_counts(ds: &Dataset) -> Vec<(Zone, usize)> {
    let mut counts: Vec<(Zone, usize)> = Zone::ALL
        .iter()
        .map(|&z| (z, ds.by_zone(z).count()))
        .filter(|&(_, n)| n > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` most populous records; stable, so equal populations keep input order.
pub fn top_n_by_population(ds: &Dataset, n: usize) -> Vec<&MunicipalityRecord> {
    let mut rows: Vec<&MunicipalityRecord> = ds.iter().collect();
    rows.sort_by(|a, b| b.population.cmp(&a.population));
    rows.truncate(n);
    rows
}

/// Round to an integer and group digits with commas, e.g. `124675.3` -> `124,675`.
pub fn format_thousands(v: f64) -> String {
    if !v.is_finite() {
        return NO_DATA.to_string();
    }
    let rounded = v.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
