//! Error types for zettel-core

use thiserror::Error;

/// Result type alias using zettel-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in zettel-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level or decode failure from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
