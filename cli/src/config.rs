//! Client configuration.
//!
//! Values come from command-line flags first, then the environment
//! (`main` loads a `.env` file when present and clap reads the fallbacks).
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FOLDRUN_BACKEND_HOST` | Backend base URL, e.g. `https://portal.example.org` |
//! | `FOLDRUN_ACCESS_TOKEN` | Bearer token sent with every request |

use std::time::Duration;

use foldrun_core::{AccessToken, StaticCredentials};

use crate::error::{CliError, CliResult};

/// Environment variable holding the backend base URL.
pub const BACKEND_HOST_VAR: &str = "FOLDRUN_BACKEND_HOST";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_VAR: &str = "FOLDRUN_ACCESS_TOKEN";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute backend base URL.
    pub backend_host: String,
    /// Bearer token, if one was configured.
    pub access_token: Option<AccessToken>,
    /// Request timeout. `None` keeps the HTTP client's defaults.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config from explicit values.
    ///
    /// The host is required and must be an absolute http(s) URL. A missing
    /// token is not an error here; the submission reports it.
    pub fn new(
        backend_host: Option<String>,
        access_token: Option<String>,
        timeout: Option<Duration>,
    ) -> CliResult<Self> {
        let backend_host = backend_host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "No backend host configured. Pass --backend or set {}",
                    BACKEND_HOST_VAR
                ))
            })?;

        let url = reqwest::Url::parse(&backend_host)
            .map_err(|e| CliError::Config(format!("Invalid backend host '{}': {}", backend_host, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CliError::Config(format!(
                "Backend host must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            backend_host,
            access_token: access_token.and_then(AccessToken::new),
            timeout,
        })
    }

    pub fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new(self.access_token.clone())
    }
}
