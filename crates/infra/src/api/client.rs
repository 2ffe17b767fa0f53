//! Authenticated HTTP client for the mnubo REST API

use chrono::Utc;
use mnubo_domain::{ClientCredentials, MnuboError, Result};
use parking_lot::Mutex;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::auth::{basic_authorization, AccessToken, TokenResponse};
use super::transport::{BodyEncoding, Transport};

/// Resource API base path, relative to the host
pub const API_PATH: &str = "/api/v3/";

/// Token endpoint, relative to the host
pub const TOKEN_PATH: &str = "/oauth/token?grant_type=client_credentials";

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Authenticates every request made to the mnubo platform
///
/// The bearer token starts out absent and is fetched lazily by the first
/// request, then replaced whenever it has expired. The token cache is guarded
/// by a mutex held across the refresh, so concurrent callers trigger at most
/// one token request.
pub struct ApiManager {
    credentials: ClientCredentials,
    http: Client,
    token: Mutex<Option<AccessToken>>,
}

impl ApiManager {
    /// Create a manager without contacting the server.
    ///
    /// # Errors
    /// Returns `MnuboError::Config` if the HTTP client cannot be built.
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("mnubo-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MnuboError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { credentials, http, token: Mutex::new(None) })
    }

    /// Create a manager and authenticate immediately.
    ///
    /// # Errors
    /// Returns `MnuboError::Config` if the HTTP client cannot be built and
    /// `MnuboError::Auth` if the initial token request fails.
    pub fn connect(credentials: ClientCredentials) -> Result<Self> {
        let manager = Self::new(credentials)?;
        manager.ensure_valid_token()?;
        Ok(manager)
    }

    #[must_use]
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// `{host}/api/v3/`
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}{}", self.credentials.base_host(), API_PATH)
    }

    /// `{host}/oauth/token?grant_type=client_credentials`
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.credentials.base_host(), TOKEN_PATH)
    }

    /// Request a fresh access token. The cache is left untouched.
    ///
    /// # Errors
    /// Returns `MnuboError::Auth` if the request fails or the response lacks
    /// `access_token` / `expires_in`.
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id))]
    pub fn fetch_token(&self) -> Result<AccessToken> {
        let requested_at = Utc::now();
        debug!("Requesting access token");

        let response = self
            .http
            .post(self.auth_url())
            .header(AUTHORIZATION, basic_authorization(&self.credentials))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .map_err(|e| MnuboError::Auth(format!("Token request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| MnuboError::Auth(format!("Failed to read token response: {e}")))?;

        let token = TokenResponse::parse(&body)
            .map_err(|e| {
                warn!(%status, error = %e, "Token endpoint returned an unusable body");
                e
            })?
            .into_token(requested_at)?;

        info!(expires_in_secs = token.expires_in().num_seconds(), "Access token acquired");
        Ok(token)
    }

    /// `true` iff a token is cached and has not expired.
    #[must_use]
    pub fn is_token_valid(&self) -> bool {
        self.token.lock().as_ref().is_some_and(AccessToken::is_valid)
    }

    /// Fetch and cache a token unless the cached one is still valid.
    ///
    /// # Errors
    /// Propagates `MnuboError::Auth` from [`fetch_token`](Self::fetch_token).
    pub fn ensure_valid_token(&self) -> Result<()> {
        self.bearer_token().map(|_| ())
    }

    /// Unconditionally replace the cached token.
    ///
    /// # Errors
    /// Propagates `MnuboError::Auth` from [`fetch_token`](Self::fetch_token).
    pub fn refresh_token(&self) -> Result<()> {
        let token = self.fetch_token()?;
        *self.token.lock() = Some(token);
        Ok(())
    }

    /// Authenticated `GET`; `params` become the query string.
    ///
    /// # Errors
    /// `MnuboError::Auth` if no token can be obtained, `MnuboError::Transport`
    /// if the request fails before a response arrives.
    pub fn get(&self, route: &str, params: &[(&str, &str)]) -> Result<Response> {
        let mut request = self.authorized(Method::GET, route)?;
        if !params.is_empty() {
            request = request.query(params);
        }
        self.send(Method::GET, route, request.header(CONTENT_TYPE, JSON_CONTENT_TYPE))
    }

    /// Authenticated `POST` with an optional JSON body.
    ///
    /// # Errors
    /// See [`get`](Self::get).
    pub fn post(&self, route: &str, body: Option<&Value>) -> Result<Response> {
        let mut request =
            self.authorized(Method::POST, route)?.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(Method::POST, route, request)
    }

    /// Authenticated `PUT`, JSON or form encoded.
    ///
    /// # Errors
    /// See [`get`](Self::get). Form encoding fails with
    /// `MnuboError::Serialization` unless `body` is a flat object.
    pub fn put(&self, route: &str, body: &Value, encoding: BodyEncoding) -> Result<Response> {
        let request = self.authorized(Method::PUT, route)?;
        let request = match encoding {
            BodyEncoding::Json => request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).json(body),
            BodyEncoding::Form => {
                request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).form(&form_fields(body)?)
            }
        };
        self.send(Method::PUT, route, request)
    }

    /// Authenticated `DELETE`.
    ///
    /// # Errors
    /// See [`get`](Self::get).
    pub fn delete(&self, route: &str) -> Result<Response> {
        let request =
            self.authorized(Method::DELETE, route)?.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.send(Method::DELETE, route, request)
    }

    /// Token guard: returns a valid bearer token, refreshing the cache first
    /// when it is absent or expired.
    fn bearer_token(&self) -> Result<String> {
        let mut cached = self.token.lock();
        match cached.as_ref() {
            Some(token) if token.is_valid() => return Ok(token.access_token().to_owned()),
            Some(_) => debug!("Access token expired, refreshing"),
            None => debug!("No access token cached, fetching"),
        }

        let token = self.fetch_token()?;
        let value = token.access_token().to_owned();
        *cached = Some(token);
        Ok(value)
    }

    fn authorized(&self, method: Method, route: &str) -> Result<RequestBuilder> {
        let token = self.bearer_token()?;
        let url = format!("{}{}", self.api_url(), route.trim_start_matches('/'));
        Ok(self.http.request(method, url).header(AUTHORIZATION, format!("Bearer {token}")))
    }

    fn send(&self, method: Method, route: &str, request: RequestBuilder) -> Result<Response> {
        debug!(%method, route, "Sending authenticated request");

        match request.send() {
            Ok(response) => {
                debug!(%method, route, status = %response.status(), "Received response");
                Ok(response)
            }
            Err(e) => {
                let err = MnuboError::Transport(format!("{method} {route} failed: {e}"));
                warn!(%method, route, label = err.label(), error = %e, "Request failed");
                Err(err)
            }
        }
    }
}

impl Transport for ApiManager {
    type Response = Response;

    fn get(&self, route: &str, params: &[(&str, &str)]) -> Result<Response> {
        Self::get(self, route, params)
    }

    fn post(&self, route: &str, body: Option<&Value>) -> Result<Response> {
        Self::post(self, route, body)
    }

    fn put(&self, route: &str, body: &Value, encoding: BodyEncoding) -> Result<Response> {
        Self::put(self, route, body, encoding)
    }

    fn delete(&self, route: &str) -> Result<Response> {
        Self::delete(self, route)
    }
}

/// Flatten a JSON object into form fields. `null` values are dropped.
fn form_fields(body: &Value) -> Result<Vec<(String, String)>> {
    let object = body.as_object().ok_or_else(|| {
        MnuboError::Serialization("form-encoded bodies must be JSON objects".to_string())
    })?;

    object
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let encoded = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(MnuboError::Serialization(format!(
                        "field '{key}' cannot be form-encoded"
                    )))
                }
            };
            Ok((key.clone(), encoded))
        })
        .collect()
}
