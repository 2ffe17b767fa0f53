//! Shared helpers for the wiremock-backed integration tests.

use mnubo_domain::ClientCredentials;
use mnubo_infra::ApiManager;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `base64("client-id:client-secret")`
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

pub fn credentials(host: &str) -> ClientCredentials {
    ClientCredentials::new("client-id", "client-secret", host)
}

pub fn manager(host: &str) -> ApiManager {
    ApiManager::new(credentials(host)).expect("http client should build")
}

/// Mount a token endpoint issuing `token`, expected to be hit `times` times.
pub async fn mount_token(server: &MockServer, token: &str, expires_in: i64, times: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(query_param("grant_type", "client_credentials"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": token, "expires_in": expires_in})),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Run blocking client code off the async test runtime.
pub async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task panicked")
}
