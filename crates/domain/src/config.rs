//! Client credentials

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials issued by mnubo plus the host they are valid for
///
/// `hostname` is the scheme and authority of the target environment
/// (sandbox or production), e.g. `https://rest.sandbox.mnubo.com`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
    pub hostname: String,
}

impl ClientCredentials {
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            hostname: hostname.into(),
        }
    }

    /// Host with any trailing `/` removed, ready for path concatenation.
    #[must_use]
    pub fn base_host(&self) -> &str {
        self.hostname.trim_end_matches('/')
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("hostname", &self.hostname)
            .finish()
    }
}
