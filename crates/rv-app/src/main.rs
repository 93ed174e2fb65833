//! Command-line entry point for the recall analytics core
//!
//! Loads a recall dataset, applies the maker/model/year filter from the
//! command line, and prints every derived dashboard structure as either a
//! plain-text report or one JSON document for an external renderer.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use rv_core::FilterCriteria;
use rv_data::{DatasetConfig, RecordStore};

mod report;

use report::DashboardReport;

const USAGE: &str =
    "usage: recallvis <dataset.(json|csv)> [--maker NAME] [--model NAME] [--year YEAR] [--json]";

/// Parsed command-line options
struct CliArgs {
    dataset: PathBuf,
    maker: Option<String>,
    model: Option<String>,
    year: Option<String>,
    json: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut dataset = None;
        let mut maker = None;
        let mut model = None;
        let mut year = None;
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--maker" => maker = Some(args.next().context("--maker requires a value")?),
                "--model" => model = Some(args.next().context("--model requires a value")?),
                "--year" => year = Some(args.next().context("--year requires a value")?),
                "--json" => json = true,
                other if other.starts_with("--") => {
                    bail!("unknown option: {}\n{}", other, USAGE)
                }
                other => {
                    if dataset.is_some() {
                        bail!("unexpected argument: {}\n{}", other, USAGE);
                    }
                    dataset = Some(PathBuf::from(other));
                }
            }
        }

        Ok(Self {
            dataset: dataset.with_context(|| USAGE.to_string())?,
            maker,
            model,
            year,
            json,
        })
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let config = DatasetConfig::from_path(args.dataset.clone())?;
    let store = match RecordStore::load(&config) {
        Ok(store) => store,
        Err(err) => {
            // Fatal: no partial dashboard is rendered on a load failure
            error!("Failed to load dataset {}: {}", config.file_name(), err);
            return Err(err.into());
        }
    };

    let criteria = FilterCriteria::from_query(
        args.maker.as_deref(),
        args.model.as_deref(),
        args.year.as_deref(),
    );
    let records = store.select(&criteria);
    info!("Selected {} of {} records", records.len(), store.len());

    let report = DashboardReport::build(&store, &criteria, &records);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
