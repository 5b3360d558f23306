//! Command implementations for the Gapminder CLI.
//!
//! Every command loads the dataset once, runs one engine operation and
//! prints its result as pretty JSON on stdout.

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use gm_data::{prepare, ColumnMap, Dataset, RawTable};
use gm_engine::DashboardConfig;

pub mod chart;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Row count, continents, countries and year range of the dataset
    Summary,

    /// Country options and default selection for a continent
    Options {
        /// Continent name, e.g. "Asia"
        #[arg(short = 'g', long)]
        group: String,
    },

    /// Chart specification for one control tuple
    Chart {
        #[arg(short = 'g', long)]
        group: String,

        #[arg(short = 'y', long)]
        year: i32,

        /// Country to include (repeatable); none means the whole continent
        #[arg(short = 'e', long = "entity")]
        entities: Vec<String>,

        /// Chart type key (scatter, bubble, bar, histogram, line, choropleth, box)
        #[arg(short = 'k', long)]
        kind: Option<String>,

        /// X-axis metric key (gdpPercap, lifeExp, pop, gdp_growth)
        #[arg(long)]
        x: Option<String>,

        /// Y-axis metric key
        #[arg(long)]
        y: Option<String>,

        /// Print the Plotly.js figure instead of the chart specification
        #[arg(long)]
        plotly: bool,
    },
}

/// Load dashboard settings from a TOML file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = DashboardConfig::from_toml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Read and prepare the CSV at `path`.
pub fn load_dataset(path: &Path, columns: &ColumnMap) -> anyhow::Result<Dataset> {
    let csv_data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let table = RawTable::from_csv_str(&csv_data)?;
    let dataset = prepare(&table, columns)?;
    log::info!("Prepared {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

pub fn run(command: Command, data_path: &Path, config: &DashboardConfig) -> anyhow::Result<()> {
    let dataset = load_dataset(data_path, &config.columns)?;
    let output = match command {
        Command::Summary => summary::summarize(&dataset),
        Command::Options { group } => chart::options_json(&group, &dataset, config)?,
        Command::Chart {
            group,
            year,
            entities,
            kind,
            x,
            y,
            plotly,
        } => {
            let request = chart::ChartRequest {
                group,
                year,
                entities,
                kind,
                x,
                y,
            };
            chart::chart_json(&request, &dataset, config, plotly)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
