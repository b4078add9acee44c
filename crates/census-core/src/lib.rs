// File: crates/census-core/src/lib.rs
// Summary: Census core entry point; dataset construction, statistics and highlight views.

pub mod error;
pub mod record;
pub mod municipalities;
pub mod dataset;
pub mod stats;
pub mod highlight;

pub use error::DatasetError;
pub use record::{MunicipalityRecord, NumericColumn, Zone};
pub use municipalities::MunicipalityColumns;
pub use dataset::{Dataset, DatasetBuilder, PercentSource, RngSource, DEFAULT_SEED};
pub use stats::{describe, format_thousands, mean_population_by_zone, top_n_by_population, zone_counts, ColumnSummary, Describe, ZoneMean};
pub use highlight::{highlight_table, HighlightMark, HighlightRow};
