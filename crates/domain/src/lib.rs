//! # mnubo Domain
//!
//! Value types shared by every layer of the mnubo client.
//!
//! This crate contains:
//! - Resource models (owners, smart objects, events) and their wire layout
//! - Client credentials
//! - The error taxonomy and `Result` alias
//!
//! ## Architecture
//! - No dependencies on other mnubo crates
//! - No I/O; serialization only

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
