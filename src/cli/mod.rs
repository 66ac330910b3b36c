//! Command-line interface.

pub mod output;
pub mod scan;

use clap::Parser;
use std::path::PathBuf;

use crate::core::constants::DEFAULT_PAUSE_MS;

/// Paramscan - find which Parameter Store entries hold a given value.
#[derive(Parser, Debug)]
#[command(
    name = "paramscan",
    about = "Find which Parameter Store entries hold a given value",
    version
)]
pub struct Cli {
    /// Value to search for (exact, case-sensitive)
    #[arg(long)]
    pub value: Option<String>,

    /// AWS region (defaults to the AWS provider chain, then sa-east-1)
    #[arg(long, env = "PARAMSCAN_REGION")]
    pub region: Option<String>,

    /// Custom Parameter Store endpoint, e.g. http://localhost:4566
    #[arg(long, env = "PARAMSCAN_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Read parameters from a JSON snapshot instead of Parameter Store
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,

    /// Pause before each direct lookup, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_PAUSE_MS)]
    pub delay_ms: u64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the scan described by the parsed flags.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    scan::execute(&cli)
}
