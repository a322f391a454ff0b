//! Access-token plumbing.
//!
//! The submission flow never looks the token up itself; whoever drives it
//! passes a [`CredentialProvider`].

use std::fmt;

/// An OAuth bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token, returning `None` for blank input.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Supplies the current access token, if any.
pub trait CredentialProvider {
    fn access_token(&self) -> Option<AccessToken>;
}

/// A fixed token (or the fixed absence of one).
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<AccessToken>);

impl StaticCredentials {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self(token)
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<AccessToken> {
        self.0.clone()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn access_token(&self) -> Option<AccessToken> {
        (**self).access_token()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for std::rc::Rc<P> {
    fn access_token(&self) -> Option<AccessToken> {
        (**self).access_token()
    }
}
