//! Result type alias shared across the workspace.
//!
//! Functions in this workspace return `Result<T>` with `QuoteError` as the default error.
use crate::error::QuoteError;

/// Workspace-wide `Result` alias with `QuoteError` as the default error.
pub type Result<T, E = QuoteError> = std::result::Result<T, E>;
