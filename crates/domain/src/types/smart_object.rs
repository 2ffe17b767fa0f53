//! Smart object (device) model

use serde::{Deserialize, Serialize};

/// A registered device or data source, keyed by its device id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartObject {
    #[serde(rename = "x_device_id")]
    pub device_id: String,
    #[serde(rename = "x_object_type")]
    pub object_type: String,
    pub event_id: Option<String>,
    /// Username of the owning account, if any
    #[serde(rename = "x_owner")]
    pub owner: Option<String>,
    #[serde(rename = "x_registration_date")]
    pub registration_date: String,
}

impl SmartObject {
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        object_type: impl Into<String>,
        registration_date: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            object_type: object_type.into(),
            event_id: None,
            owner: None,
            registration_date: registration_date.into(),
        }
    }

    #[must_use]
    pub fn with_owner(mut self, username: impl Into<String>) -> Self {
        self.owner = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_optional_fields_as_null() {
        let object = SmartObject::new("DEVICE_ID", "OBJECT_TYPE", "2015-01-01T12:00:00");

        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({
                "x_device_id": "DEVICE_ID",
                "x_object_type": "OBJECT_TYPE",
                "event_id": null,
                "x_owner": null,
                "x_registration_date": "2015-01-01T12:00:00"
            })
        );
    }

    #[test]
    fn owner_reference_is_sent_as_x_owner() {
        let object = SmartObject::new("DEVICE_ID", "OBJECT_TYPE", "2015-01-01T12:00:00")
            .with_owner("alice")
            .with_event_id("E1");
        let json = serde_json::to_value(&object).unwrap();

        assert_eq!(json["x_owner"], "alice");
        assert_eq!(json["event_id"], "E1");
    }
}
