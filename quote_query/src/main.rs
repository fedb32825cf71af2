//! Quote Query: a command-line tool that looks up stock quotes through one of the
//! compiled-in quote providers and prints the results to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! quote_query services
//! quote_query attributes
//! quote_query attributes --service stooq
//! quote_query query --service yahoo --symbols ORCL,MSFT --attributes SYMBOL,LAST_TRADE_PRICE
//! ```
//!
//! Provider endpoints and separators come from `QUOTE_SERVICE_<PROVIDER>_*`
//! environment variables; log verbosity from `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod output;

use crate::args::{Args, Command};
use clap::Parser;
use log::debug;
use quote_common::{
    ProviderRegistry, QueryOrchestrator, QuoteAttribute, QuoteConfig, QuoteError, QuoteRequest, Result,
};
use std::io::{self, Write};
use std::process::ExitCode;

/// Executes one parsed command, writing user-facing output to `out`.
fn run<W: Write>(command: Command, orchestrator: &QueryOrchestrator, out: &mut W) -> Result<()> {
    match command {
        Command::Services => output::write_services(out, &orchestrator.registry().service_names()),
        Command::Attributes { service: None } => output::write_attributes(out, &QuoteAttribute::enumerate()),
        Command::Attributes { service: Some(service) } => {
            let provider = orchestrator.resolve(service.trim())?;
            output::write_attributes(out, &provider.supported_attributes())
        }
        Command::Query {
            service,
            symbols,
            attributes,
            json,
        } => {
            let provider = orchestrator.resolve(service.trim())?;
            let attributes = QuoteAttribute::parse_list(&attributes);
            let request = QuoteRequest::from_csv(&symbols, attributes)?;
            debug!("Request: {:?}", request);

            let rows = orchestrator.run(provider, &request)?;
            if json {
                output::write_rows_json(out, &rows)
            } else {
                output::write_rows(out, &rows)
            }
        }
    }
}

/// Short human-readable summary for a failed command.
fn describe(err: &QuoteError) -> &'static str {
    match err {
        QuoteError::ProviderNotFound(_) => "Unknown quote service, see `quote_query services`",
        QuoteError::InvalidRequest(_) => "Invalid query",
        QuoteError::MalformedResponse { .. } => "Quote service answered with unexpected data",
        e if e.is_transport() => "Quote service could not be reached",
        _ => "Failure executing service command",
    }
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let orchestrator = QueryOrchestrator::new(ProviderRegistry::discover(&QuoteConfig::from_env()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(args.command, &orchestrator, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}: {}", describe(&e), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
