//! Smart object management

use std::sync::Arc;

use mnubo_domain::{Result, SmartObject};
use tracing::instrument;

use crate::api::{BodyEncoding, Transport};

const OBJECTS: &str = "objects";

/// Create, update and delete smart objects
pub struct SmartObjectService<T> {
    transport: Arc<T>,
}

impl<T> Clone for SmartObjectService<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport) }
    }
}

impl<T: Transport> SmartObjectService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `POST objects`
    ///
    /// # Errors
    /// Serialization or transport failures.
    #[instrument(skip_all, fields(device_id = %object.device_id))]
    pub fn create(&self, object: &SmartObject) -> Result<T::Response> {
        let body = serde_json::to_value(object)?;
        self.transport.post(OBJECTS, Some(&body))
    }

    /// `PUT objects/{device_id}`
    ///
    /// # Errors
    /// Serialization or transport failures.
    #[instrument(skip_all, fields(device_id = %object.device_id))]
    pub fn update(&self, object: &SmartObject) -> Result<T::Response> {
        let body = serde_json::to_value(object)?;
        self.transport.put(&format!("{OBJECTS}/{}", object.device_id), &body, BodyEncoding::Json)
    }

    /// `DELETE objects/{device_id}`
    ///
    /// # Errors
    /// Transport failures only.
    #[instrument(skip(self))]
    pub fn delete(&self, device_id: &str) -> Result<T::Response> {
        self.transport.delete(&format!("{OBJECTS}/{device_id}"))
    }
}
