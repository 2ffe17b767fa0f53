//! Owner (end-user account) model

use serde::{Deserialize, Serialize};

/// An end-user account that can own smart objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub username: String,
    #[serde(rename = "x_registration_date")]
    pub registration_date: String,
    #[serde(rename = "x_password")]
    pub password: String,
    pub event_id: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        registration_date: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            registration_date: registration_date.into(),
            password: password.into(),
            event_id: None,
        }
    }

    #[must_use]
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}
