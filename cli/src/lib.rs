//! # Foldrun CLI - submit fold jobs from a terminal
//!
//! Native front end over [`foldrun_core`]: the same form fields, the same
//! precondition checks and messages, sent with `reqwest`.
//!
//! ## Modules
//!
//! - [`config`] - Backend host, token and timeout
//! - [`transport`] - `reqwest` transport
//! - [`input`] - FASTA file loading
//! - [`error`] - CLI error type

pub mod config;
pub mod error;
pub mod input;
pub mod transport;

pub use config::{ClientConfig, ACCESS_TOKEN_VAR, BACKEND_HOST_VAR};
pub use error::{CliError, CliResult};
pub use input::load_fasta;
pub use transport::ReqwestTransport;

use foldrun_core::{JobSubmitter, StaticCredentials};

/// `env_logger` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Submitter wired to the configured backend.
pub fn submitter(config: &ClientConfig) -> CliResult<JobSubmitter<StaticCredentials, ReqwestTransport>> {
    let transport = ReqwestTransport::new(config.timeout)?;
    Ok(JobSubmitter::new(
        config.backend_host.clone(),
        config.credentials(),
        transport,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldrun_core::CredentialProvider;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
    }

    #[test]
    fn test_submitter_uses_config() {
        let config = ClientConfig::new(Some("http://localhost:8080/".into()), Some("abc".into()), None).unwrap();
        let submitter = submitter(&config).unwrap();
        assert_eq!(submitter.backend_host(), "http://localhost:8080/");
        assert!(config.credentials().access_token().is_some());
    }
}
