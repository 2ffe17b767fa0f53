//! Resource models exchanged with the mnubo REST API
//!
//! Field names on the wire are fixed by the remote service; the serde
//! renames below are the contract. Absent optional values serialize as
//! `null` rather than being omitted.

pub mod event;
pub mod owner;
pub mod smart_object;

pub use event::{Event, Timeseries};
pub use owner::Owner;
pub use smart_object::SmartObject;
