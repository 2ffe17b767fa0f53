//! Access tokens for the client-credentials grant
//!
//! The token is requested with HTTP Basic credentials and cached by
//! [`ApiManager`](super::ApiManager) until it expires. There is no refresh
//! token in this flow: an expired token is simply requested again.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use mnubo_domain::{ClientCredentials, MnuboError, Result};
use serde::Deserialize;

/// Bearer token issued by the mnubo authorization server
///
/// `requested_at` is captured before the token request is sent, so the
/// computed expiry errs on the early side.
#[derive(Clone)]
pub struct AccessToken {
    access_token: String,
    expires_in: Duration,
    requested_at: DateTime<Utc>,
}

impl AccessToken {
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        expires_in: Duration,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self { access_token: access_token.into(), expires_in, requested_at }
    }

    /// Raw token value for the `Authorization: Bearer` header
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    #[must_use]
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// `None` if `requested_at + expires_in` is not representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.requested_at.checked_add_signed(self.expires_in)
    }

    /// `true` while `requested_at + expires_in` is still in the future.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| expires_at > now)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("requested_at", &self.requested_at)
            .finish()
    }
}

/// Token endpoint response body
///
/// Only the two fields the client relies on are required; anything else the
/// server sends (`token_type`, `scope`, ...) is ignored.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    /// Parse a raw token endpoint body.
    ///
    /// # Errors
    /// Returns `MnuboError::Auth` if the body is not JSON or lacks
    /// `access_token` / `expires_in`.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| MnuboError::Auth(format!("Invalid token response: {e}")))
    }

    /// # Errors
    /// Returns `MnuboError::Auth` if `expires_in` is outside the range a
    /// duration can hold.
    pub fn into_token(self, requested_at: DateTime<Utc>) -> Result<AccessToken> {
        let expires_in = Duration::try_seconds(self.expires_in).ok_or_else(|| {
            MnuboError::Auth(format!("expires_in out of range: {}", self.expires_in))
        })?;
        Ok(AccessToken::new(self.access_token, expires_in, requested_at))
    }
}

/// `Authorization` header value for the token request:
/// `Basic base64(client_id:client_secret)`.
#[must_use]
pub fn basic_authorization(credentials: &ClientCredentials) -> String {
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}
