//! Event submission

use std::sync::Arc;

use mnubo_domain::{Event, Result};
use tracing::instrument;

use crate::api::Transport;

const EVENTS: &str = "events";

/// Send telemetry events
pub struct EventService<T> {
    transport: Arc<T>,
}

impl<T> Clone for EventService<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport) }
    }
}

impl<T: Transport> EventService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `POST events`
    ///
    /// # Errors
    /// Serialization or transport failures.
    #[instrument(skip_all, fields(event_id = %event.event_id, object = %event.object))]
    pub fn send(&self, event: &Event) -> Result<T::Response> {
        let body = serde_json::to_value(event)?;
        self.transport.post(EVENTS, Some(&body))
    }

    /// Send `event` on behalf of `device_id`.
    ///
    /// Goes through the same `events` route; the event's `x_object` is
    /// replaced by `device_id`.
    ///
    /// # Errors
    /// Serialization or transport failures.
    #[instrument(skip(self, event), fields(event_id = %event.event_id))]
    pub fn send_to_object(&self, device_id: &str, event: &Event) -> Result<T::Response> {
        let scoped = Event { object: device_id.to_string(), ..event.clone() };
        self.send(&scoped)
    }
}
