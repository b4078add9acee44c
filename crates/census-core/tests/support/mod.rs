// File: crates/census-core/tests/support/mod.rs
// Purpose: Shared deterministic percentage source and tiny column fixtures.

#![allow(dead_code)]

use census_core::{MunicipalityColumns, PercentSource};

/// Replays fractions of each requested range, cycling when exhausted.
pub struct Fractions {
    fracs: Vec<f64>,
    next: usize,
}

impl Fractions {
    pub fn new(fracs: &[f64]) -> Self {
        Self { fracs: fracs.to_vec(), next: 0 }
    }
}

impl PercentSource for Fractions {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let f = self.fracs[self.next % self.fracs.len()];
        self.next += 1;
        low + f * (high - low)
    }
}

pub const NAMES: [&str; 4] = ["Alfa", "Beta", "Gama", "Delta"];
pub const POPS: [u32; 4] = [1000, 2500, 2500, 40];
pub const AREAS: [f64; 4] = [10.0, 3.0, 7.0, 0.5];
pub const ZONES: [&str; 4] = ["Urbane", "Rurale", "Rurale", "Rurale"];

pub fn four() -> MunicipalityColumns<'static> {
    MunicipalityColumns { names: &NAMES, populations: &POPS, areas_km2: &AREAS, zones: &ZONES }
}
