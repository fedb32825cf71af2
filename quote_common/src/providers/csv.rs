//! Provider for backends that answer with one CSV line per symbol.
//!
//! Such a backend takes a single GET of the form `<base>?s=<symbols>&f=<codes>`,
//! where `<symbols>` are joined by a configurable separator and `<codes>` is the
//! concatenation of per-attribute wire codes. Both parameters are
//! form-urlencoded, so the default separator (a space) goes out as `+`.
//! The body holds one line per symbol and one field per sent attribute, both
//! in request order.
//!
//! Concrete backends (see `yahoo` and `stooq`) only supply their defaults and
//! their wire-code table; [`CsvQuoteService`] does the rest.

use std::mem;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::{Client, Request};

use crate::attribute::QuoteAttribute;
use crate::config::QuoteConfig;
use crate::error::QuoteError;
use crate::provider::QuoteProvider;
use crate::request::QuoteRequest;
use crate::result::Result;
use crate::row::QuoteRow;

/// Attribute to wire-code table of a provider. `None` marks an unsupported attribute.
pub type WireCodes = fn(QuoteAttribute) -> Option<&'static str>;

/// Attributes that made it onto the wire, with their concatenated codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodedAttributes {
    /// Attributes in request order, unsupported ones removed.
    pub(crate) sent: Vec<QuoteAttribute>,
    /// Wire codes of `sent`, concatenated without separator.
    pub(crate) codes: String,
}

/// Translates `attributes` through `codes`, dropping and logging unsupported ones.
pub(crate) fn encode_attributes(service: &str, attributes: &[QuoteAttribute], codes: WireCodes) -> EncodedAttributes {
    let mut encoded = EncodedAttributes {
        sent: Vec::with_capacity(attributes.len()),
        codes: String::new(),
    };
    for &attribute in attributes {
        match codes(attribute) {
            Some(code) => {
                encoded.sent.push(attribute);
                encoded.codes.push_str(code);
            }
            None => warn!("Unsupported attribute for {}: {}", service, attribute),
        }
    }
    encoded
}

/// Joins ticker symbols with the backend's separator.
pub fn join_symbols(symbols: &[String], separator: &str) -> String {
    symbols.join(separator)
}

/// Splits one response line on `separator`.
///
/// Separators inside double quotes do not split, and the quotes themselves are
/// removed: `"Oracle, Corp",40.12` yields `Oracle, Corp` and `40.12`.
pub fn split_fields(line: &str, separator: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c == '"' {
            in_quotes = !in_quotes;
            rest = &rest[1..];
        } else if !in_quotes && !separator.is_empty() && rest.starts_with(separator) {
            fields.push(mem::take(&mut current));
            rest = &rest[separator.len()..];
        } else {
            current.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    fields.push(current);
    fields
}

/// Parses a response body into one row per requested symbol.
///
/// `sent` must be the attributes that were put on the wire, in order. A body
/// whose line count differs from `expected_rows` is rejected. Within a line,
/// missing trailing fields leave their attributes unset and surplus fields are
/// ignored; both cases are logged.
pub fn parse_rows(
    body: &str,
    sent: &[QuoteAttribute],
    expected_rows: usize,
    separator: &str,
) -> Result<Vec<QuoteRow>> {
    let mut lines: Vec<&str> = body.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if lines.len() != expected_rows {
        return Err(QuoteError::MalformedResponse {
            expected: expected_rows,
            actual: lines.len(),
        });
    }

    let rows: Vec<QuoteRow> = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let fields = split_fields(line, separator);
            if fields.len() < sent.len() {
                warn!(
                    "Line {} has {} field(s) for {} attribute(s); leaving the rest unset",
                    index + 1,
                    fields.len(),
                    sent.len()
                );
            } else if fields.len() > sent.len() {
                warn!(
                    "Line {} has {} field(s) for {} attribute(s); ignoring the surplus",
                    index + 1,
                    fields.len(),
                    sent.len()
                );
            }
            sent.iter().copied().zip(fields).collect()
        })
        .collect();

    Ok(rows)
}

/// Compiled-in defaults of a CSV endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CsvDefaults {
    /// Service name used for provider selection.
    pub service_name: &'static str,
    /// Endpoint receiving the query string.
    pub base_url: &'static str,
    /// Separator placed between ticker symbols, before URL encoding.
    pub symbol_separator: &'static str,
    /// Separator between fields of a response line.
    pub response_separator: &'static str,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Settings of a CSV endpoint after environment lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEndpointConfig {
    /// Service name used for provider selection.
    pub service_name: String,
    /// Endpoint receiving the query string.
    pub base_url: String,
    /// Separator placed between ticker symbols.
    pub symbol_separator: String,
    /// Separator between fields of a response line.
    pub response_separator: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl CsvEndpointConfig {
    /// Resolves the `QUOTE_SERVICE_<PREFIX>_*` keys against `config`.
    ///
    /// Keys: `NAME`, `URL`, `SECURITY_SEPARATOR`, `RESPONSE_SEPARATOR`, `TIMEOUT_SECS`.
    pub fn resolve(config: &QuoteConfig, prefix: &str, defaults: &CsvDefaults) -> Self {
        let key = |suffix: &str| format!("QUOTE_SERVICE_{}_{}", prefix, suffix);

        let timeout_key = key("TIMEOUT_SECS");
        let raw_timeout = config.get(&timeout_key, &defaults.timeout_secs.to_string());
        let timeout_secs = raw_timeout.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!(
                "Ignoring {}={}: not a number of seconds, using {}",
                timeout_key, raw_timeout, defaults.timeout_secs
            );
            defaults.timeout_secs
        });

        Self {
            service_name: config.get(&key("NAME"), defaults.service_name),
            base_url: config.get(&key("URL"), defaults.base_url),
            symbol_separator: config.get(&key("SECURITY_SEPARATOR"), defaults.symbol_separator),
            response_separator: config.get(&key("RESPONSE_SEPARATOR"), defaults.response_separator),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// A quote provider speaking the line-oriented CSV protocol.
#[derive(Debug)]
pub struct CsvQuoteService {
    config: CsvEndpointConfig,
    codes: WireCodes,
    extra_query: &'static [(&'static str, &'static str)],
}

impl CsvQuoteService {
    /// Service for `config` using the wire-code table `codes`.
    pub fn new(config: CsvEndpointConfig, codes: WireCodes) -> Self {
        Self {
            config,
            codes,
            extra_query: &[],
        }
    }

    /// Appends fixed parameters (e.g. `("e", "csv")`) to every query string.
    pub fn with_extra_query(mut self, extra_query: &'static [(&'static str, &'static str)]) -> Self {
        self.extra_query = extra_query;
        self
    }

    /// Resolved endpoint settings.
    pub fn config(&self) -> &CsvEndpointConfig {
        &self.config
    }

    /// Request URL for `symbols` and already encoded attribute `codes`.
    pub fn query_url(&self, symbols: &[String], codes: &str) -> Result<Url> {
        let request = self.request(&self.client()?, symbols, codes)?;
        Ok(request.url().clone())
    }

    fn client(&self) -> Result<Client> {
        Ok(Client::builder().timeout(self.config.timeout).build()?)
    }

    fn request(&self, client: &Client, symbols: &[String], codes: &str) -> Result<Request> {
        let mut params = vec![
            ("s", join_symbols(symbols, &self.config.symbol_separator)),
            ("f", codes.to_string()),
        ];
        params.extend(self.extra_query.iter().map(|(k, v)| (*k, v.to_string())));

        client
            .get(&self.config.base_url)
            .query(&params)
            .build()
            .map_err(|e| {
                QuoteError::InvalidRequest(format!(
                    "cannot build {} request for {}: {}",
                    self.config.service_name, self.config.base_url, e
                ))
            })
    }

    fn fetch(&self, client: &Client, request: Request) -> Result<String> {
        let response = client.execute(request).map_err(|e| {
            QuoteError::Transport(format!("{} request failed: {}", self.config.service_name, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Transport(format!(
                "{} answered with HTTP {}",
                self.config.service_name, status
            )));
        }

        response.text().map_err(|e| {
            QuoteError::Transport(format!("{} response unreadable: {}", self.config.service_name, e))
        })
    }
}

impl QuoteProvider for CsvQuoteService {
    fn service_name(&self) -> &str {
        &self.config.service_name
    }

    fn execute_query(&self, request: &QuoteRequest) -> Result<Vec<QuoteRow>> {
        let encoded = encode_attributes(&self.config.service_name, request.attributes(), self.codes);
        if encoded.sent.is_empty() {
            return Err(QuoteError::InvalidRequest(format!(
                "none of the requested attributes is supported by {}",
                self.config.service_name
            )));
        }

        let client = self.client()?;
        let http_request = self.request(&client, request.symbols(), &encoded.codes)?;
        debug!("Query url: {}", http_request.url());

        let body = self.fetch(&client, http_request)?;
        parse_rows(
            &body,
            &encoded.sent,
            request.symbols().len(),
            &self.config.response_separator,
        )
    }

    fn supported_attributes(&self) -> Vec<QuoteAttribute> {
        QuoteAttribute::enumerate()
            .into_iter()
            .filter(|attribute| (self.codes)(*attribute).is_some())
            .collect()
    }
}
