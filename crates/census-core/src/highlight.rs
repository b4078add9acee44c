// File: crates/census-core/src/highlight.rs
// Summary: Female/youth percentage table with max/min rows marked by element-wise equality.

use crate::dataset::Dataset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMark {
    None,
    /// Equal to the column maximum.
    Max,
    /// Equal to the column minimum.
    Min,
    /// Max and min at once; only when every value is equal.
    Both,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightRow<'a> {
    pub name: &'a str,
    pub female_percent: f64,
    pub youth_percent: f64,
    pub mark: HighlightMark,
}

/// Every row tied with the max (or min) `female_percent` is marked.
pub fn highlight_table(ds: &Dataset) -> Vec<HighlightRow<'_>> {
    let max = ds.iter().map(|r| r.female_percent).fold(f64::NEG_INFINITY, f64::max);
    let min = ds.iter().map(|r| r.female_percent).fold(f64::INFINITY, f64::min);

    ds.iter()
        .map(|r| {
            let v = r.female_percent;
            let mark = match (v == max, v == min) {
                (true, true) => HighlightMark::Both,
                (true, false) => HighlightMark::Max,
                (false, true) => HighlightMark::Min,
                (false, false) => HighlightMark::None,
            };
            HighlightRow { name: &r.name, female_percent: v, youth_percent: r.youth_percent, mark }
        })
        .collect()
}
