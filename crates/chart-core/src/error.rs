// File: crates/chart-core/src/error.rs
// Summary: Chart construction and rendering failures.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("series `{series}` has {found} values for {expected} categories")]
    CategoryMismatch {
        series: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to create raster surface")]
    Surface,

    #[error("pixel readback failed")]
    Readback,
}
