//! Event (telemetry record) model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form timeseries payload: field name to value
pub type Timeseries = Map<String, Value>;

/// A timestamped telemetry record emitted by a smart object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    #[serde(rename = "x_timestamp")]
    pub timestamp: String,
    #[serde(rename = "x_event_type")]
    pub event_type: String,
    pub timeseries: Option<Timeseries>,
    /// Device id of the emitting smart object
    #[serde(rename = "x_object")]
    pub object: String,
}

impl Event {
    #[must_use]
    pub fn new(
        event_id: impl Into<String>,
        object: impl Into<String>,
        event_type: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp: timestamp.into(),
            event_type: event_type.into(),
            timeseries: None,
            object: object.into(),
        }
    }

    #[must_use]
    pub fn with_timeseries(mut self, timeseries: Timeseries) -> Self {
        self.timeseries = Some(timeseries);
        self
    }

    /// Add a single timeseries field, creating the payload if needed.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.timeseries.get_or_insert_with(Map::new).insert(field.into(), value.into());
        self
    }
}
