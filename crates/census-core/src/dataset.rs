// File: crates/census-core/src/dataset.rs
// Summary: Dataset builder (validation, derived density, seeded percentage columns) and the immutable Dataset.
// Notes:
// - Construction is a pure function of the literal columns and the generator; there is no shared state.
// - The female column is drawn in full before the youth column, both from the same generator.

use std::collections::HashSet;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::municipalities::MunicipalityColumns;
use crate::record::{round1, MunicipalityRecord, Zone};
use crate::DatasetError;

/// Seed used by the published report.
pub const DEFAULT_SEED: u64 = 42;

/// Closed ranges of the generated percentage columns.
pub const FEMALE_RANGE: Range<f64> = 48.0..52.0;
pub const YOUTH_RANGE: Range<f64> = 25.0..35.0;

/// Source of uniformly distributed draws. Injected so tests can pin exact values.
pub trait PercentSource {
    /// Draw from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Adapts any `rand` generator into a `PercentSource`.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PercentSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }
}

pub struct DatasetBuilder<'a> {
    columns: MunicipalityColumns<'a>,
    seed: u64,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(columns: MunicipalityColumns<'a>) -> Self {
        Self { columns, seed: DEFAULT_SEED }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build with the default seeded generator (`StdRng` seeded with `self.seed`).
    pub fn build(self) -> Result<Dataset, DatasetError> {
        let seed = self.seed;
        let mut source = RngSource::seeded(seed);
        let mut ds = self.build_with(&mut source)?;
        ds.seed = Some(seed);
        Ok(ds)
    }

    /// Build drawing percentages from an injected source.
    pub fn build_with<S: PercentSource + ?Sized>(self, source: &mut S) -> Result<Dataset, DatasetError> {
        let c = self.columns;
        let n = c.names.len();
        if n == 0 {
            return Err(DatasetError::Empty);
        }
        check_len("populations", n, c.populations.len())?;
        check_len("areas_km2", n, c.areas_km2.len())?;
        check_len("zones", n, c.zones.len())?;

        let mut seen = HashSet::with_capacity(n);
        let mut records = Vec::with_capacity(n);
        for i in 0..n {
            let name = c.names[i];
            if !seen.insert(name) {
                return Err(DatasetError::DuplicateName(name.to_string()));
            }
            let area = c.areas_km2[i];
            if !area.is_finite() || area <= 0.0 {
                return Err(DatasetError::InvalidArea { name: name.to_string(), area });
            }
            let zone: Zone = c.zones[i].parse()?;
            let population = c.populations[i];
            records.push(MunicipalityRecord {
                index: i + 1,
                name: name.to_string(),
                population,
                area_km2: area,
                zone,
                density_per_km2: round1(population as f64 / area),
                female_percent: 0.0,
                youth_percent: 0.0,
            });
        }

        for r in records.iter_mut() {
            r.female_percent = draw_percent(source, FEMALE_RANGE);
        }
        for r in records.iter_mut() {
            r.youth_percent = draw_percent(source, YOUTH_RANGE);
        }

        tracing::debug!(records = records.len(), "dataset built");
        Ok(Dataset { records, seed: None })
    }
}

fn check_len(column: &'static str, expected: usize, found: usize) -> Result<(), DatasetError> {
    if expected != found {
        return Err(DatasetError::ColumnLength { column, expected, found });
    }
    Ok(())
}

fn draw_percent<S: PercentSource + ?Sized>(source: &mut S, range: Range<f64>) -> f64 {
    let v = source.uniform(range.start, range.end);
    round1(v.clamp(range.start, range.end))
}

/// Immutable, ordered municipality table.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<MunicipalityRecord>,
    seed: Option<u64>,
}

impl Dataset {
    /// Built-in Kosovo dataset with the given seed.
    pub fn kosovo(seed: u64) -> Result<Self, DatasetError> {
        DatasetBuilder::new(MunicipalityColumns::kosovo()).seed(seed).build()
    }

    pub fn records(&self) -> &[MunicipalityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MunicipalityRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seed used by `build()`; `None` when built from an injected source.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn by_zone(&self, zone: Zone) -> impl Iterator<Item = &MunicipalityRecord> + '_ {
        self.records.iter().filter(move |r| r.zone == zone)
    }

    pub fn find(&self, name: &str) -> Option<&MunicipalityRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MunicipalityRecord;
    type IntoIter = std::slice::Iter<'a, MunicipalityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
