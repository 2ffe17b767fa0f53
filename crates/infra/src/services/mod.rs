//! Resource services
//!
//! Stateless façades that turn domain models into JSON payloads and routes
//! and delegate the call to a [`Transport`](crate::api::Transport). Responses
//! are passed back unchanged.

pub mod event;
pub mod owner;
pub mod smart_object;

pub use event::EventService;
pub use owner::OwnerService;
pub use smart_object::SmartObjectService;
