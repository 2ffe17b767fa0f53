//! Owner management

use std::sync::Arc;

use mnubo_domain::{Owner, Result};
use tracing::instrument;

use crate::api::{BodyEncoding, Transport};

const OWNERS: &str = "owners";

/// Create, update, delete and claim-on-behalf-of owners
pub struct OwnerService<T> {
    transport: Arc<T>,
}

impl<T> Clone for OwnerService<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport) }
    }
}

impl<T: Transport> OwnerService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// `POST owners`
    ///
    /// # Errors
    /// Serialization or transport failures; HTTP statuses are not inspected.
    #[instrument(skip_all, fields(username = %owner.username))]
    pub fn create(&self, owner: &Owner) -> Result<T::Response> {
        let body = serde_json::to_value(owner)?;
        self.transport.post(OWNERS, Some(&body))
    }

    /// `POST owners/{owner}/objects/{device_id}/claim` with no body.
    ///
    /// # Errors
    /// Transport failures only.
    #[instrument(skip(self))]
    pub fn claim(&self, owner_username: &str, device_id: &str) -> Result<T::Response> {
        self.transport.post(&format!("{OWNERS}/{owner_username}/objects/{device_id}/claim"), None)
    }

    /// `PUT owners/{username}` with the same fields as [`create`](Self::create).
    ///
    /// # Errors
    /// Serialization or transport failures.
    #[instrument(skip_all, fields(username = %owner.username))]
    pub fn update(&self, owner: &Owner) -> Result<T::Response> {
        let body = serde_json::to_value(owner)?;
        self.transport.put(&format!("{OWNERS}/{}", owner.username), &body, BodyEncoding::Json)
    }

    /// `DELETE owners/{owner_username}`
    ///
    /// # Errors
    /// Transport failures only.
    #[instrument(skip(self))]
    pub fn delete(&self, owner_username: &str) -> Result<T::Response> {
        self.transport.delete(&format!("{OWNERS}/{owner_username}"))
    }
}
