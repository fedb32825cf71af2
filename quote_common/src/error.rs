//! Error types shared by the quote library and the command-line front-end.
//!
//! The `QuoteError` enum separates failures the caller must be able to tell
//! apart: an unknown provider name, a failed network exchange and a response
//! that does not line up with the request.
use std::io;

use thiserror::Error;

/// Unified error type for quote queries.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// No registered provider answers to the requested name.
    #[error("Service {0} was not discovered")]
    ProviderNotFound(String),

    /// The request could not be delivered or the backend refused it.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The backend answered, but the number of lines does not match the number of symbols.
    #[error("Malformed response: expected {expected} line(s), got {actual}")]
    MalformedResponse {
        /// Number of symbols that were requested.
        expected: usize,
        /// Number of non-empty lines in the response body.
        actual: usize,
    },

    /// The request is empty or cannot be expressed to the selected provider.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error raised by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding rows as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// I/O error while writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl QuoteError {
    /// `true` for failures that happened on the wire rather than in our own bookkeeping.
    pub fn is_transport(&self) -> bool {
        matches!(self, QuoteError::Transport(_) | QuoteError::Http(_))
    }
}
