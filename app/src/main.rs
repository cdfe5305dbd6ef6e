//! ech-inspect: decode ECH config lists from base64 text or live HTTPS records
//! - tracing init (env + `-v`)
//! - `decode`: local input
//! - `lookup`: DoH fetch, then decode
//!
//! Exit status is 1 when the ECH payload does not decode.

mod cli;
mod config;
mod doh;
mod logging;
mod render;

use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = cli::Args::parse();

    logging::init_logging(logging::LoggingConfig::from_env().with_verbosity(args.verbose))?;

    let decoded = match args.command {
        cli::Commands::Decode(a) => cli::decode::run(a)?,
        cli::Commands::Lookup(a) => cli::lookup::run(a).await?,
    };

    Ok(if decoded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
