//! A quote request: which symbols, which attributes.
use log::warn;

use crate::attribute::QuoteAttribute;
use crate::error::QuoteError;
use crate::result::Result;

/// Ordered symbols and ordered attributes for one query.
///
/// Both lists are non-empty. Symbol order fixes row order in the result and
/// attribute order fixes column order. Repeated symbols are kept, one row each;
/// a repeated attribute keeps only its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    symbols: Vec<String>,
    attributes: Vec<QuoteAttribute>,
}

impl QuoteRequest {
    /// Creates a request, trimming symbols, dropping blank ones and repeated attributes.
    pub fn new<I, S>(symbols: I, attributes: Vec<QuoteAttribute>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if symbols.is_empty() {
            return Err(QuoteError::InvalidRequest(
                "at least one ticker symbol is required".to_string(),
            ));
        }
        if attributes.is_empty() {
            return Err(QuoteError::InvalidRequest(
                "at least one quote attribute is required".to_string(),
            ));
        }

        let mut unique = Vec::with_capacity(attributes.len());
        for attribute in attributes {
            if unique.contains(&attribute) {
                warn!("Ignoring repeated attribute: {}", attribute);
            } else {
                unique.push(attribute);
            }
        }
        let attributes = unique;

        Ok(Self {
            symbols,
            attributes,
        })
    }

    /// Creates a request from a comma separated symbol list, e.g. `"ORCL, MSFT"`.
    pub fn from_csv(symbols: &str, attributes: Vec<QuoteAttribute>) -> Result<Self> {
        Self::new(symbols.split(','), attributes)
    }

    /// Requested symbols in order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Requested attributes in order.
    pub fn attributes(&self) -> &[QuoteAttribute] {
        &self.attributes
    }
}
