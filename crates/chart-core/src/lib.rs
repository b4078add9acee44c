// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod palette;
pub mod text;
pub mod figure;
pub mod render;
pub mod error;

pub use chart::{Chart, GridLines};
pub use series::{Series, SeriesType};
pub use axis::Axis;
pub use figure::Figure;
pub use render::RenderOptions;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::ChartError;
pub use grid::{histogram_bins, Bin};
