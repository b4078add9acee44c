// File: crates/census-report/src/lib.rs
// Summary: Report generator library; chart stages, page assembly and terminal summary over one Dataset.

pub mod config;
pub mod stages;
pub mod report;
pub mod page;
pub mod summary;

pub use config::ReportConfig;
pub use report::Report;
pub use stages::{ChartPanel, Stage, STAGES};
pub use page::render_html;
pub use summary::render_summary;
