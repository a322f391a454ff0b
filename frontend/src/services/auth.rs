//! Access token lookup for the browser.
//!
//! The sign-in flow (outside this crate) stores the token in
//! `sessionStorage`; it is re-read on every submit so a fresh sign-in is
//! picked up without reloading the form.

use foldrun_core::{AccessToken, CredentialProvider};

use crate::config::ACCESS_TOKEN_KEY;

#[derive(Debug, Clone)]
pub struct SessionTokenProvider {
    key: String,
}

impl SessionTokenProvider {
    pub fn new() -> Self {
        Self::with_key(ACCESS_TOKEN_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for SessionTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for SessionTokenProvider {
    fn access_token(&self) -> Option<AccessToken> {
        let storage = web_sys::window()?.session_storage().ok()??;
        let token = storage.get_item(&self.key).ok()??;
        AccessToken::new(token)
    }
}
