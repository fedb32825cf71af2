//! Quote attributes that can be requested from any provider.
//!
//! The catalog is closed and provider independent. Providers translate the subset
//! they understand into their own wire codes; see `providers` for the tables.

use log::warn;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Set of queryable quote attributes.
///
/// Names are displayed and parsed in `SCREAMING_SNAKE_CASE` (`LAST_TRADE_PRICE`);
/// parsing ignores ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum QuoteAttribute {
    /// Ticker symbol as echoed by the provider.
    Symbol,
    /// Company name.
    CompanyName,
    /// Last trade price.
    LastTradePrice,
    /// Book value per share.
    BookValue,
    /// Earnings per share.
    EarningsPs,
    /// Dividend per share.
    DividendPs,
    /// Ex-dividend date.
    ExDividendDate,
    /// Dividend pay date.
    DividendDate,
    /// Dividend yield.
    DividendYield,
    /// Price / sales ratio.
    PriceSales,
    /// Price / book ratio.
    PriceBook,
    /// Price / earnings ratio.
    PriceEarnings,
}

impl QuoteAttribute {
    /// All attributes in declaration order.
    pub fn enumerate() -> Vec<QuoteAttribute> {
        QuoteAttribute::iter().collect()
    }

    /// Parses a comma separated list of attribute names.
    ///
    /// Blank entries are skipped silently; unknown names are logged and skipped,
    /// so the result may be shorter than the input. Order is preserved.
    pub fn parse_list(csv: &str) -> Vec<QuoteAttribute> {
        let mut attributes = Vec::new();
        for name in csv.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<QuoteAttribute>() {
                Ok(attribute) => attributes.push(attribute),
                Err(_) => warn!("Ignoring unrecognized attribute: {}", name),
            }
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_is_fixed_and_ordered() {
        let all = QuoteAttribute::enumerate();
        assert_eq!(all.len(), 12);
        assert_eq!(all.first(), Some(&QuoteAttribute::Symbol));
        assert_eq!(all.last(), Some(&QuoteAttribute::PriceEarnings));
        assert_eq!(all, QuoteAttribute::enumerate());
    }

    #[test]
    fn names_use_screaming_snake_case() {
        assert_eq!(QuoteAttribute::LastTradePrice.to_string(), "LAST_TRADE_PRICE");
        assert_eq!(QuoteAttribute::ExDividendDate.as_ref(), "EX_DIVIDEND_DATE");
        assert_eq!(
            "last_trade_price".parse::<QuoteAttribute>().ok(),
            Some(QuoteAttribute::LastTradePrice)
        );
    }

    #[test]
    fn parse_list_skips_unknown_names() {
        let parsed = QuoteAttribute::parse_list("SYMBOL, bogus ,PRICE_BOOK,,");
        assert_eq!(parsed, vec![QuoteAttribute::Symbol, QuoteAttribute::PriceBook]);
    }

    #[test]
    fn display_round_trips_for_every_attribute() {
        for attribute in QuoteAttribute::enumerate() {
            assert_eq!(attribute.to_string().parse::<QuoteAttribute>().ok(), Some(attribute));
        }
    }
}
