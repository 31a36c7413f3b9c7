//! HTTP client for the relay endpoint.
//!
//! Sends `{ "userMessage": ... }` and understands both reply shapes:
//! `{ "response": ... }` on success and `{ "error": ... }` (HTTP 500) on
//! failure. One attempt per call.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use mindcare_core::chat::relay::RelayClient;
use mindcare_types::config::ClientConfig;
use mindcare_types::error::RelayError;
use mindcare_types::relay::{RelayReply, RelayRequest};

/// Longest slice of a non-JSON error body kept in [`RelayError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Relay client over HTTP.
pub struct HttpRelayClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<SecretString>,
}

impl HttpRelayClient {
    pub fn new(
        url: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
            api_key,
        })
    }

    /// Build from the `[client]` section of `mindcare.toml`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, RelayError> {
        Self::new(
            config.relay_url.clone(),
            config.relay_api_key.clone().map(SecretString::from),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hosted relays expect the key both as `apikey` and as a bearer token.
    fn auth_headers(&self) -> Result<HeaderMap, RelayError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let key = key.expose_secret();
            let apikey = HeaderValue::from_str(key)
                .map_err(|e| RelayError::Transport(format!("invalid relay key: {e}")))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| RelayError::Transport(format!("invalid relay key: {e}")))?;
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);
        }
        Ok(headers)
    }
}

impl RelayClient for HttpRelayClient {
    async fn generate(&self, user_message: &str) -> Result<String, RelayError> {
        let body = RelayRequest {
            user_message: user_message.to_string(),
        };

        let response = self
            .http
            .post(&self.url)
            .headers(self.auth_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = text.len(), "relay responded");

        match serde_json::from_str::<RelayReply>(&text) {
            Ok(RelayReply::Failure(body)) => Err(RelayError::Upstream(body.error)),
            Ok(RelayReply::Success(body)) if status.is_success() => Ok(body.response),
            Ok(RelayReply::Success(_)) => Err(RelayError::Status {
                status: status.as_u16(),
                message: "unexpected success body on error status".to_string(),
            }),
            Err(_) if !status.is_success() => Err(RelayError::Status {
                status: status.as_u16(),
                message: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            }),
            Err(e) => Err(RelayError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::post;
    use serde_json::{Value, json};

    use super::*;

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Start a throwaway relay stub and return its base URL.
    async fn spawn_stub(seen: Seen) -> String {
        let ok_seen = seen.clone();
        let app = Router::new()
            .route(
                "/ok",
                post(move |headers: AxumHeaders, Json(body): Json<Value>| {
                    let seen = ok_seen.clone();
                    async move {
                        let apikey = headers
                            .get("apikey")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.lock().unwrap().push((apikey, body.clone()));
                        Json(json!({ "response": format!("echo: {}", body["userMessage"].as_str().unwrap_or("")) }))
                    }
                }),
            )
            .route(
                "/fail",
                post(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Failed to generate response." })),
                    )
                }),
            )
            .route(
                "/html",
                post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
            )
            .route("/garbage", post(|| async { "definitely not json" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(url: String, key: Option<&str>) -> HttpRelayClient {
        HttpRelayClient::new(url, key.map(SecretString::from), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_sends_user_message_field() {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(seen.clone()).await;

        let reply = client(format!("{base}/ok"), None)
            .generate("hello")
            .await
            .unwrap();
        assert_eq!(reply, "echo: hello");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, None);
        assert_eq!(seen[0].1, json!({ "userMessage": "hello" }));
    }

    #[tokio::test]
    async fn test_api_key_header_is_sent() {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(seen.clone()).await;

        client(format!("{base}/ok"), Some("anon-key"))
            .generate("hi")
            .await
            .unwrap();
        assert_eq!(seen.lock().unwrap()[0].0.as_deref(), Some("anon-key"));
    }

    #[tokio::test]
    async fn test_error_body_maps_to_upstream_error() {
        let base = spawn_stub(Arc::new(Mutex::new(Vec::new()))).await;
        let err = client(format!("{base}/fail"), None)
            .generate("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Upstream(ref m) if m.starts_with("Failed")));
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let base = spawn_stub(Arc::new(Mutex::new(Vec::new()))).await;
        let err = client(format!("{base}/html"), None)
            .generate("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Status { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let base = spawn_stub(Arc::new(Mutex::new(Vec::new()))).await;
        let err = client(format!("{base}/garbage"), None)
            .generate("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/generate-response"), None)
            .generate("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[test]
    fn test_from_config_uses_relay_url() {
        let config = ClientConfig::default();
        let client = HttpRelayClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:8787/generate-response");
    }
}
