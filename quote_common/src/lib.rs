//!
//! Provider-independent stock quote queries.
//!
//! This crate aggregates:
//! - `attribute`: the closed catalog of queryable `QuoteAttribute`s.
//! - `row`: `QuoteRow`, one symbol's attribute values.
//! - `request`: `QuoteRequest`, the ordered symbols and attributes of a query.
//! - `config`: environment-then-default configuration lookup.
//! - `provider`: the `QuoteProvider` contract.
//! - `registry`: compile-time provider registration and discovery.
//! - `query`: `QueryOrchestrator`, name resolution and dispatch.
//! - `providers`: the compiled-in backends.
//! - `error` / `result`: `QuoteError` and the `Result` alias.
#![warn(missing_docs)]
pub mod attribute;
pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod query;
pub mod registry;
pub mod request;
pub mod result;
pub mod row;

#[doc(hidden)]
pub use inventory;

pub use attribute::QuoteAttribute;
pub use config::QuoteConfig;
pub use error::QuoteError;
pub use provider::QuoteProvider;
pub use query::QueryOrchestrator;
pub use registry::ProviderRegistry;
pub use request::QuoteRequest;
pub use result::Result;
pub use row::QuoteRow;
