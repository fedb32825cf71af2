//! Yahoo CSV quote service.
//!
//! Configuration keys (environment first, then the default):
//!
//! | key | default |
//! |-----|---------|
//! | `QUOTE_SERVICE_YAHOO_NAME` | `Yahoo` |
//! | `QUOTE_SERVICE_YAHOO_URL` | `http://finance.yahoo.com/d/quotes.csv` |
//! | `QUOTE_SERVICE_YAHOO_SECURITY_SEPARATOR` | `+` |
//! | `QUOTE_SERVICE_YAHOO_RESPONSE_SEPARATOR` | `,` |
//! | `QUOTE_SERVICE_YAHOO_TIMEOUT_SECS` | `30` |
use crate::attribute::QuoteAttribute;
use crate::config::QuoteConfig;
use crate::provider::QuoteProvider;
use crate::providers::csv::{CsvDefaults, CsvEndpointConfig, CsvQuoteService};

/// Registration id and configuration key prefix.
pub const PREFIX: &str = "YAHOO";

/// Compiled-in defaults.
pub const DEFAULTS: CsvDefaults = CsvDefaults {
    service_name: "Yahoo",
    base_url: "http://finance.yahoo.com/d/quotes.csv",
    symbol_separator: " ",
    response_separator: ",",
    timeout_secs: 30,
};

/// Yahoo's `f=` code for each attribute.
pub fn wire_code(attribute: QuoteAttribute) -> Option<&'static str> {
    use QuoteAttribute::*;
    let code = match attribute {
        Symbol => "s",
        CompanyName => "n",
        LastTradePrice => "l1",
        BookValue => "b4",
        EarningsPs => "e",
        DividendPs => "d",
        ExDividendDate => "q",
        DividendDate => "r1",
        DividendYield => "y",
        PriceSales => "p5",
        PriceBook => "p6",
        PriceEarnings => "r",
    };
    Some(code)
}

/// Builds the Yahoo service from process configuration.
pub fn service(config: &QuoteConfig) -> CsvQuoteService {
    CsvQuoteService::new(CsvEndpointConfig::resolve(config, PREFIX, &DEFAULTS), wire_code)
}

fn build(config: &QuoteConfig) -> Box<dyn QuoteProvider> {
    Box::new(service(config))
}

crate::register_provider!(PREFIX, build);
