// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers and equal-width histogram binning.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Step of the form {1, 2, 5} x 10^k closest above `span / target`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = (span.abs() / target.max(1) as f64).max(1e-12);
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Round-valued ticks inside `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let eps = step * 1e-9;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max + eps {
        // snap -0.0 and float drift
        out.push(if v.abs() < eps { 0.0 } else { v });
        v += step;
    }
    out
}

/// Tick label with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", v)
    } else {
        let decimals = (-step.log10()).ceil().max(0.0) as usize;
        format!("{:.*}", decimals, v)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over `[min, max]`; the last bin is closed. Non-finite values are skipped.
/// A degenerate range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() { return Vec::new(); }
    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo < 1e-12 {
        lo -= 0.5;
        hi += 0.5;
    }
    let edges = linspace(lo, hi, bins + 1);
    let mut out: Vec<Bin> = edges.windows(2).map(|e| Bin { lo: e[0], hi: e[1], count: 0 }).collect();
    let width = (hi - lo) / bins as f64;
    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_step(230_000.0, 6), 50_000.0);
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(50_000.0, 50_000.0), "50000");
    }

    #[test]
    fn last_bin_is_closed() {
        let bins = histogram_bins(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
        assert_eq!(bins[3].hi, 4.0);
    }

    #[test]
    fn degenerate_range_widens() {
        let bins = histogram_bins(&[3.0, 3.0], 2);
        assert_eq!(bins[0].lo, 2.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!(histogram_bins(&[], 20).is_empty());
    }
}
