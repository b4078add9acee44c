// File: crates/chart-core/src/axis.rs
// Summary: Axis title and value range; categorical charts keep the range in band units.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Unlabelled unit axis; replaced by `Chart::autoscale_axes`.
    pub fn unit() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
