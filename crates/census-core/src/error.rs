// File: crates/census-core/src/error.rs
// Summary: Construction-time failures for malformed literal input.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("column `{column}` has {found} entries, expected {expected}")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("dataset has no municipalities")]
    Empty,

    #[error("duplicate municipality name `{0}`")]
    DuplicateName(String),

    #[error("municipality `{name}` has invalid area {area} km²")]
    InvalidArea { name: String, area: f64 },

    #[error("unknown zone label `{0}`")]
    UnknownZone(String),
}
