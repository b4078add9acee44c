// File: crates/census-core/src/record.rs
// Summary: Municipality row model, zone classification and numeric column accessors.

use std::fmt;
use std::str::FromStr;

use crate::DatasetError;

/// Urban/rural classification of a municipality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Urban,
    Rural,
}

impl Zone {
    /// Declaration order; used to break ties when counting.
    pub const ALL: [Zone; 2] = [Zone::Urban, Zone::Rural];

    /// Display label as shown in the report.
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Urban => "Urbane",
            Zone::Rural => "Rurale",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("urbane") || t.eq_ignore_ascii_case("urban") {
            Ok(Zone::Urban)
        } else if t.eq_ignore_ascii_case("rurale") || t.eq_ignore_ascii_case("rural") {
            Ok(Zone::Rural)
        } else {
            Err(DatasetError::UnknownZone(s.to_string()))
        }
    }
}

/// One municipality. Built once by `DatasetBuilder`; never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MunicipalityRecord {
    /// 1-based position in input order.
    pub index: usize,
    pub name: String,
    pub population: u32,
    pub area_km2: f64,
    pub zone: Zone,
    /// `population / area_km2`, rounded to one decimal.
    pub density_per_km2: f64,
    pub female_percent: f64,
    pub youth_percent: f64,
}

/// Numeric columns exposed to statistics and tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericColumn {
    Population,
    Area,
    Density,
    FemalePercent,
    YouthPercent,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 5] = [
        NumericColumn::Population,
        NumericColumn::Area,
        NumericColumn::Density,
        NumericColumn::FemalePercent,
        NumericColumn::YouthPercent,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            NumericColumn::Population => "Komunat me popullsi",
            NumericColumn::Area => "Sipërfaqja në km²",
            NumericColumn::Density => "Dendësia e popullsisë",
            NumericColumn::FemalePercent => "% Grave",
            NumericColumn::YouthPercent => "% Të Rinjtë",
        }
    }

    pub fn value(self, r: &MunicipalityRecord) -> f64 {
        match self {
            NumericColumn::Population => r.population as f64,
            NumericColumn::Area => r.area_km2,
            NumericColumn::Density => r.density_per_km2,
            NumericColumn::FemalePercent => r.female_percent,
            NumericColumn::YouthPercent => r.youth_percent,
        }
    }
}

/// Round half away from zero to one decimal place.
#[inline]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_parses_both_languages() {
        assert_eq!("Urbane".parse::<Zone>().unwrap(), Zone::Urban);
        assert_eq!(" rural ".parse::<Zone>().unwrap(), Zone::Rural);
        assert!(matches!("Suburban".parse::<Zone>(), Err(DatasetError::UnknownZone(_))));
    }

    #[test]
    fn round1_matches_one_decimal() {
        assert_eq!(round1(227466.0 / 572.0), 397.7);
        assert_eq!(round1(69870.0 / 83.0), 841.8);
        assert_eq!(round1(9000.0 / 12.0), 750.0);
    }
}
