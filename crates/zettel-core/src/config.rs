//! Client configuration.
//!
//! The client needs exactly one piece of configuration: the base URL of the
//! remote zettel store. It is read from the `ZETTEL_SERVER_URL` environment
//! variable (binaries load `.env` via `dotenvy` before calling in here).

use crate::error::{Error, Result};
use crate::util::is_http_url;

/// Environment variable naming the store's base URL.
pub const SERVER_URL_VAR: &str = "ZETTEL_SERVER_URL";

/// Default store URL when the environment provides none.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Runtime configuration for client front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the zettel store, scheme included, no trailing slash.
    pub server_url: String,
}

impl ClientConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::with_server_url(raw)
    }

    /// Build a configuration for an explicit store URL.
    pub fn with_server_url(raw: impl Into<String>) -> Result<Self> {
        let server_url = raw.into().trim().trim_end_matches('/').to_string();
        if server_url.is_empty() {
            return Err(Error::Config("server URL must not be empty".to_string()));
        }
        if !is_http_url(&server_url) {
            return Err(Error::Config(format!(
                "server URL '{server_url}' must include http:// or https://"
            )));
        }
        Ok(Self { server_url })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn with_server_url_trims_trailing_slash() {
        let config = ClientConfig::with_server_url("http://notes.local:5000/").unwrap();
        assert_eq!(config.server_url, "http://notes.local:5000");
    }

    #[test]
    fn with_server_url_rejects_missing_scheme() {
        assert!(ClientConfig::with_server_url("notes.local:5000").is_err());
        assert!(ClientConfig::with_server_url("   ").is_err());
    }
}
