//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the mnubo client
///
/// HTTP error statuses are not errors here: the transport hands 4xx/5xx
/// responses back to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MnuboError {
    /// The client-credentials grant failed (network, malformed body, missing
    /// fields).
    #[error("Authentication error: {0}")]
    Auth(String),

    /// An authenticated request failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MnuboError {
    /// Stable label suitable for structured log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Transport(_) => "transport",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for MnuboError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for mnubo operations
pub type Result<T> = std::result::Result<T, MnuboError>;
