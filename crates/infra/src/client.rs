//! Entry point bundling the transport with the three resource services

use std::sync::Arc;

use mnubo_domain::{ClientCredentials, Result};

use crate::api::{ApiManager, Transport};
use crate::config;
use crate::services::{EventService, OwnerService, SmartObjectService};

/// mnubo client: one shared transport, three resource services
///
/// ```no_run
/// use mnubo_domain::{ClientCredentials, Owner};
/// use mnubo_infra::MnuboClient;
///
/// # fn example() -> mnubo_domain::Result<()> {
/// let client = MnuboClient::new(ClientCredentials::new(
///     "client-id",
///     "client-secret",
///     "https://rest.sandbox.mnubo.com",
/// ))?;
///
/// let response = client.owners().create(&Owner::new("alice", "pw", "2015-01-01T12:00:00"))?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
pub struct MnuboClient<T = ApiManager> {
    transport: Arc<T>,
    owners: OwnerService<T>,
    objects: SmartObjectService<T>,
    events: EventService<T>,
}

impl MnuboClient<ApiManager> {
    /// Build a client; the first request authenticates.
    ///
    /// # Errors
    /// Returns `MnuboError::Config` if the HTTP client cannot be built.
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(ApiManager::new(credentials)?)))
    }

    /// Build a client from [`config::load`] (environment, then config file).
    ///
    /// # Errors
    /// Returns `MnuboError::Config` if no credentials can be loaded.
    pub fn from_config() -> Result<Self> {
        Self::new(config::load()?)
    }

    #[must_use]
    pub fn api_manager(&self) -> &ApiManager {
        &self.transport
    }
}

impl<T: Transport> MnuboClient<T> {
    pub fn with_transport(transport: Arc<T>) -> Self {
        Self {
            owners: OwnerService::new(Arc::clone(&transport)),
            objects: SmartObjectService::new(Arc::clone(&transport)),
            events: EventService::new(Arc::clone(&transport)),
            transport,
        }
    }

    #[must_use]
    pub fn owners(&self) -> &OwnerService<T> {
        &self.owners
    }

    #[must_use]
    pub fn objects(&self) -> &SmartObjectService<T> {
        &self.objects
    }

    #[must_use]
    pub fn events(&self) -> &EventService<T> {
        &self.events
    }

    #[must_use]
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }
}
