//! Command-line arguments for the quote query tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the stock quoting services discovered for queries.
    Services,

    /// List attributes that may be retrieved.
    Attributes {
        /// Only list what this service supports (case-insensitive).
        #[arg(long)]
        service: Option<String>,
    },

    /// Query the named service.
    Query {
        /// Service to query (case-insensitive), e.g. `yahoo`.
        #[arg(long)]
        service: String,

        /// Comma separated ticker symbols, e.g. `ORCL,MSFT`.
        #[arg(long)]
        symbols: String,

        /// Comma separated attributes, e.g. `SYMBOL,LAST_TRADE_PRICE`.
        /// Unrecognized names are ignored.
        #[arg(long, default_value = "LAST_TRADE_PRICE")]
        attributes: String,

        /// Print rows as a JSON array instead of `ATTRIBUTE = value` lines.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_last_trade_price() {
        let args = Args::try_parse_from(["quote_query", "query", "--service", "yahoo", "--symbols", "ORCL"]).unwrap();
        match args.command {
            Command::Query {
                service,
                symbols,
                attributes,
                json,
            } => {
                assert_eq!(service, "yahoo");
                assert_eq!(symbols, "ORCL");
                assert_eq!(attributes, "LAST_TRADE_PRICE");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn query_requires_service_and_symbols() {
        assert!(Args::try_parse_from(["quote_query", "query", "--symbols", "ORCL"]).is_err());
        assert!(Args::try_parse_from(["quote_query", "query", "--service", "yahoo"]).is_err());
    }

    #[test]
    fn listing_commands_parse() {
        assert!(matches!(
            Args::try_parse_from(["quote_query", "services"]).unwrap().command,
            Command::Services
        ));
        assert!(matches!(
            Args::try_parse_from(["quote_query", "attributes"]).unwrap().command,
            Command::Attributes { service: None }
        ));
        assert!(matches!(
            Args::try_parse_from(["quote_query", "attributes", "--service", "stooq"]).unwrap().command,
            Command::Attributes { service: Some(name) } if name == "stooq"
        ));
    }
}
