//! Application configuration.
//!
//! The backend host is baked in at build time:
//! `BACKEND_HOST=https://portal.example.org trunk build --release`.
//! Left unset, requests go to the page's own origin.

/// Backend API base URL.
pub const BACKEND_HOST: &str = match option_env!("BACKEND_HOST") {
    Some(host) => host,
    None => "",
};

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = foldrun_core::AUTO_HIDE_MS;

/// `sessionStorage` key the sign-in flow stores the access token under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// `accept` attribute of the FASTA file input.
pub const ACCEPTED_FILE_TYPES: &str = ".fasta";

/// Application name shown in the header.
pub const APP_NAME: &str = "AlphaFold Portal";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_timeout() {
        assert_eq!(NOTIFICATION_TIMEOUT_MS, 6000);
    }
}
