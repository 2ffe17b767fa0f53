//! Seam between the resource services and the HTTP layer

use mnubo_domain::Result;
use serde_json::Value;

/// Body encoding for `PUT` requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`; the body must be a flat JSON
    /// object and `null` fields are dropped.
    Form,
}

/// Authenticated verb-level access to the `/api/v3/` resource tree
///
/// Routes are relative to the API base (e.g. `owners/alice`). Implementations
/// hand the response back untouched; status codes are the caller's concern.
pub trait Transport {
    /// What a completed request yields
    type Response;

    fn get(&self, route: &str, params: &[(&str, &str)]) -> Result<Self::Response>;

    /// `body` is `None` for body-less posts such as claims.
    fn post(&self, route: &str, body: Option<&Value>) -> Result<Self::Response>;

    fn put(&self, route: &str, body: &Value, encoding: BodyEncoding) -> Result<Self::Response>;

    fn delete(&self, route: &str) -> Result<Self::Response>;
}
