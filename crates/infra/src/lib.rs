//! # mnubo Infrastructure
//!
//! Blocking client for the mnubo REST API.
//!
//! This crate contains:
//! - The authenticated transport ([`api::ApiManager`]) with its token cache
//! - Owner, smart object and event services
//! - Credential loading from environment or file
//! - Tracing subscriber bootstrap
//!
//! ## Architecture
//! - Depends on `mnubo-domain` for models and errors
//! - Contains all I/O

pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use api::{ApiManager, BodyEncoding, Transport};
pub use client::MnuboClient;
pub use services::{EventService, OwnerService, SmartObjectService};
