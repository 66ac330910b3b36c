//! Paramscan - find which Parameter Store entries hold a given value.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paramscan::cli::output;
use paramscan::cli::{execute, Cli};
use paramscan::core::constants::LOG_ENV;
use paramscan::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("paramscan=debug")
        } else {
            EnvFilter::new("paramscan=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::MissingValue => Some("usage: paramscan --value <VALUE> [--region <REGION>]"),
            Error::Enumerate(_) => Some("check AWS credentials and --region"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(-1);
    }
}
