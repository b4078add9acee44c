// File: crates/census-report/src/main.rs
// Summary: CLI entry point; renders the HTML report or prints a terminal summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use census_core::{Dataset, DEFAULT_SEED};
use census_report::config::DEFAULT_OUT;
use census_report::{page, summary, Report, ReportConfig};
use chart_core::theme;

#[derive(Parser)]
#[command(
    name = "census-report",
    version,
    about = "Population report for the municipalities of Kosovo",
    long_about = "Builds the municipality dataset, computes summary statistics and renders\n\
                  six charts into one self-contained HTML page.\n\
                  \n\
                  Examples:\n\
                    census-report render                       # Write target/out/report.html\n\
                    census-report render --seed 7 --theme dark\n\
                    census-report summary                      # Print tables to the terminal\n\
                  \n\
                  Environment Variables:\n\
                    CENSUS_REPORT_OUT                          # Output path for `render`\n\
                    CENSUS_REPORT_SEED                         # Seed for the generated percentages\n\
                    CENSUS_REPORT_THEME                        # Chart theme preset\n\
                    RUST_LOG                                   # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the HTML report
    Render {
        /// Output HTML path
        #[arg(long, env = "CENSUS_REPORT_OUT", default_value = DEFAULT_OUT)]
        out: PathBuf,

        /// Seed for the female/youth percentage columns
        #[arg(long, env = "CENSUS_REPORT_SEED", default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Chart theme (light, dark, solarized-light, high-contrast-dark)
        #[arg(long, env = "CENSUS_REPORT_THEME", default_value = "light")]
        theme: String,

        /// Multiplier for every chart's pixel size
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
    },

    /// Print the dataset and statistics as terminal tables
    Summary {
        /// Seed for the female/youth percentage columns
        #[arg(long, env = "CENSUS_REPORT_SEED", default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render { out, seed, theme, scale } => run_render(out, seed, &theme, scale),
        Command::Summary { seed, no_color } => {
            let dataset = Dataset::kosovo(seed).context("building municipality dataset")?;
            println!("{}", summary::render_summary(&dataset, no_color));
            Ok(())
        }
    }
}

fn run_render(out: PathBuf, seed: u64, theme_name: &str, scale: f32) -> Result<()> {
    if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(theme_name)) {
        tracing::warn!(theme = theme_name, "unknown theme, using light");
    }
    let config = ReportConfig { seed, theme: theme::find(theme_name), scale, out, ..ReportConfig::default() };

    let dataset = Dataset::kosovo(config.seed).context("building municipality dataset")?;
    tracing::info!(rows = dataset.len(), seed = config.seed, "dataset ready");

    let report = Report::build(&dataset, &config)?;
    let html = page::render_html(&report);
    chart_core::render::write_bytes(&config.out, html.as_bytes())?;
    tracing::info!(path = %config.out.display(), bytes = html.len(), "report written");
    println!("Wrote {}", config.out.display());
    Ok(())
}
