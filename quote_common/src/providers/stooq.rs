//! Stooq CSV quote service.
//!
//! Stooq only publishes symbol, name and the latest close through its CSV
//! endpoint; every other attribute is unsupported and gets dropped from the
//! request. Symbols carry a market suffix, e.g. `orcl.us`.
//!
//! Keys follow the `QUOTE_SERVICE_STOOQ_*` pattern, see [`CsvEndpointConfig::resolve`].
use crate::attribute::QuoteAttribute;
use crate::config::QuoteConfig;
use crate::provider::QuoteProvider;
use crate::providers::csv::{CsvDefaults, CsvEndpointConfig, CsvQuoteService};

/// Registration id and configuration key prefix.
pub const PREFIX: &str = "STOOQ";

/// Compiled-in defaults.
pub const DEFAULTS: CsvDefaults = CsvDefaults {
    service_name: "Stooq",
    base_url: "https://stooq.com/q/l/",
    symbol_separator: " ",
    response_separator: ",",
    timeout_secs: 30,
};

/// Stooq's `f=` code for each attribute.
pub fn wire_code(attribute: QuoteAttribute) -> Option<&'static str> {
    match attribute {
        QuoteAttribute::Symbol => Some("s"),
        QuoteAttribute::CompanyName => Some("n"),
        QuoteAttribute::LastTradePrice => Some("c"),
        _ => None,
    }
}

/// Builds the Stooq service from process configuration.
pub fn service(config: &QuoteConfig) -> CsvQuoteService {
    CsvQuoteService::new(CsvEndpointConfig::resolve(config, PREFIX, &DEFAULTS), wire_code)
        .with_extra_query(&[("e", "csv")])
}

fn build(config: &QuoteConfig) -> Box<dyn QuoteProvider> {
    Box::new(service(config))
}

crate::register_provider!(PREFIX, build);
