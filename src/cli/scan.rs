//! Scan command - list parameters and report the ones holding a value.

use std::time::Duration;
use tracing::debug;

use crate::cli::output;
use crate::cli::Cli;
use crate::core::config::StoreConfig;
use crate::core::enumerate::list_parameters;
use crate::core::search::{Report, Search};
use crate::core::store::{MemoryStore, ParameterStore, SsmStore};
use crate::error::{Error, Result};

/// Execute a scan.
pub fn execute(cli: &Cli) -> Result<()> {
    let target = cli
        .value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingValue)?;

    let store = open_store(cli)?;

    if !cli.json {
        output::status("Reading parameters list...");
    }
    let params = list_parameters(store.as_ref()).map_err(Error::Enumerate)?;

    if !cli.json {
        output::status("Searching value...");
    }
    let mut bar = output::ProgressBar::stdout(!cli.json && !cli.no_progress);
    let report = Search::new(target)
        .with_pause(Duration::from_millis(cli.delay_ms))
        .run(store.as_ref(), &params, &mut bar);

    print_report(&report, cli.json)
}

fn open_store(cli: &Cli) -> Result<Box<dyn ParameterStore>> {
    if let Some(path) = &cli.from_file {
        debug!(path = %path.display(), "using snapshot store");
        return Ok(Box::new(MemoryStore::from_snapshot(path)?));
    }

    let config = StoreConfig::new(cli.region.clone()).with_endpoint_url(cli.endpoint_url.clone());
    debug!(region = ?config.explicit_region(), "using parameter store");
    Ok(Box::new(SsmStore::connect(&config)?))
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        output::report_section(output::ERRORS_TITLE, &report.errors);
        output::report_section(output::FOUND_TITLE, &report.found);
    }
    Ok(())
}
