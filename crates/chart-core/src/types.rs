// File: crates/chart-core/src/types.rs
// Summary: Surface defaults and plot margins shared by every chart.

/// Surface size used by `RenderOptions::default`.
pub const WIDTH: i32 = 1024;
pub const HEIGHT: i32 = 640;

/// Pixels taken from the top of the plot area when a chart has a title.
pub const TITLE_BAND: u32 = 32;

/// Margins between a panel frame and its plot area. Tick labels and
/// rotated category names are drawn inside these margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for population-sized tick labels on the left, axis title below.
    fn default() -> Self {
        Self::new(88, 24, 24, 56)
    }
}
