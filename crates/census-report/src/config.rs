// File: crates/census-report/src/config.rs
// Summary: Report configuration: page metadata, seed, chart theme and output location.

use std::path::PathBuf;

use census_core::DEFAULT_SEED;
use chart_core::Theme;

pub const DEFAULT_TITLE: &str = "Analiza e Popullsisë në Komunat e Kosovës";
pub const DEFAULT_AUTHOR: &str = "Arta Sllamniku";
pub const DEFAULT_DATE: &str = "30 Qershor 2025";
pub const DEFAULT_OUT: &str = "target/out/report.html";

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub title: String,
    pub author: String,
    pub date: String,
    pub seed: u64,
    pub theme: Theme,
    /// Multiplier applied to every figure's pixel size.
    pub scale: f32,
    pub out: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            date: DEFAULT_DATE.to_string(),
            seed: DEFAULT_SEED,
            theme: Theme::light(),
            scale: 1.0,
            out: PathBuf::from(DEFAULT_OUT),
        }
    }
}

impl ReportConfig {
    /// Pixel size of a figure declared at `base`, after scaling. Never below 1x1.
    pub fn scaled(&self, base: (i32, i32)) -> (i32, i32) {
        let s = if self.scale.is_finite() && self.scale > 0.0 { self.scale } else { 1.0 };
        (
            ((base.0 as f32 * s).round() as i32).max(1),
            ((base.1 as f32 * s).round() as i32).max(1),
        )
    }
}
