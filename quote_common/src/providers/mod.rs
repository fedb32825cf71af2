//! Compiled-in quote providers.
//!
//! - `csv`: a generic provider for backends that answer with one CSV line per symbol.
//! - `yahoo`: the Yahoo CSV quote service.
//! - `stooq`: the Stooq CSV quote service.
//!
//! Each provider registers itself with the [`registry`](crate::registry); nothing
//! outside this module names a concrete provider type.
pub mod csv;
pub mod stooq;
pub mod yahoo;
