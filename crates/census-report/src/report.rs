// File: crates/census-report/src/report.rs
// Summary: One linear render pass: dataset -> statistics -> charts, collected for page assembly.

use anyhow::Result;
use census_core::{describe, mean_population_by_zone, Dataset, Describe, Zone, ZoneMean};

use crate::config::ReportConfig;
use crate::stages::{ChartPanel, STAGES};

/// Everything the page shows, computed once from a borrowed dataset.
pub struct Report<'a> {
    pub config: &'a ReportConfig,
    pub dataset: &'a Dataset,
    pub describe: Describe,
    pub zone_means: Vec<(Zone, ZoneMean)>,
    pub panels: Vec<ChartPanel>,
}

impl<'a> Report<'a> {
    pub fn build(dataset: &'a Dataset, config: &'a ReportConfig) -> Result<Self> {
        let describe = describe(dataset);
        let zone_means = Zone::ALL.iter().map(|&z| (z, mean_population_by_zone(dataset, z))).collect();
        let panels = STAGES
            .iter()
            .map(|stage| stage.render(dataset, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, dataset, describe, zone_means, panels })
    }

    pub fn panel(&self, id: &str) -> Option<&ChartPanel> {
        self.panels.iter().find(|p| p.id == id)
    }
}
