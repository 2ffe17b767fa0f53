//! Transport and authentication layer for the mnubo REST API
//!
//! [`ApiManager`] owns the client credentials and a cached bearer token. Every
//! verb first runs an explicit guard that fetches a new token when the cached
//! one is absent or expired, then issues the request against
//! `{host}/api/v3/{route}`.
//!
//! # Architecture
//!
//! - Blocking `reqwest` client (no async runtime required)
//! - OAuth2 client-credentials grant, token cached in memory only
//! - No retries and no status-code interpretation

pub mod auth;
pub mod client;
pub mod transport;

pub use auth::{basic_authorization, AccessToken, TokenResponse};
pub use client::{ApiManager, API_PATH, TOKEN_PATH};
pub use transport::{BodyEncoding, Transport};
