//! Axum router configuration with middleware.
//!
//! The generation endpoint is served at `/generate-response` and at the
//! hosted-function path `/functions/v1/generate-response`.
//! Middleware: CORS (any origin, fixed request headers), tracing.

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Request headers browsers may send to the relay.
fn allowed_headers() -> [HeaderName; 4] {
    [
        AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        CONTENT_TYPE,
    ]
}

/// Build the relay router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(allowed_headers());

    Router::new()
        .route(
            "/generate-response",
            post(handlers::relay::generate_response),
        )
        .route(
            "/functions/v1/generate-response",
            post(handlers::relay::generate_response),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness plus whether an upstream key is configured.
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_configured": state.is_ready(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use mindcare_core::llm::box_provider::BoxLlmProvider;
    use mindcare_core::llm::provider::LlmProvider;
    use mindcare_core::persona::Persona;
    use mindcare_core::relay::service::RelayService;
    use mindcare_infra::llm::create_provider;
    use mindcare_types::config::RelayConfig;
    use mindcare_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
    };
    use mindcare_types::relay::RELAY_FAILURE_MESSAGE;

    use super::*;

    /// Provider double: answers with fixed text or a network error.
    struct StubProvider {
        reply: Option<String>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn default_model(&self) -> &str {
            "stub-model"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            if let Some(last) = request.messages.last() {
                self.seen.lock().unwrap().push(last.content.clone());
            }
            match &self.reply {
                Some(text) => Ok(CompletionResponse {
                    id: "stub-1".to_string(),
                    content: text.clone(),
                    model: request.model.clone(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                None => Err(LlmError::Provider {
                    message: "error sending request: connection refused".to_string(),
                }),
            }
        }
    }

    fn state_with(reply: Option<&str>) -> (AppState, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let persona = Persona::dr_sarcasm();
        let provider = BoxLlmProvider::new(StubProvider {
            reply: reply.map(str::to_string),
            seen: seen.clone(),
        });
        let service = RelayService::new(provider, &persona, "gpt-4o-mini");
        (AppState::new(Some(service), &persona), seen)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_response_success() {
        let (state, seen) = state_with(Some("Fascinating. *adjusts glasses*"));
        let resp = build_router(state)
            .oneshot(post_json("/generate-response", r#"{"userMessage":"hello"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["access-control-allow-origin"],
            "*"
        );
        let json = body_json(resp).await;
        assert_eq!(json["response"], "Fascinating. *adjusts glasses*");
        assert!(json.get("error").is_none());
        assert_eq!(seen.lock().unwrap().as_slice(), ["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_hosted_function_path_is_served() {
        let (state, _) = state_with(Some("hi"));
        let resp = build_router(state)
            .oneshot(post_json(
                "/functions/v1/generate-response",
                r#"{"userMessage":"hello"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_500_error_body() {
        let (state, _) = state_with(None);
        let resp = build_router(state)
            .oneshot(post_json("/generate-response", r#"{"userMessage":"hello"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], RELAY_FAILURE_MESSAGE);
        assert!(json.get("response").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_500() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = RelayConfig {
            base_url: format!("http://{addr}/v1"),
            request_timeout_secs: 5,
            ..RelayConfig::default()
        };
        let persona = Persona::dr_sarcasm();
        let provider = create_provider(&config, Some(secrecy::SecretString::from("sk-test"))).unwrap();
        let service = RelayService::new(provider, &persona, config.model.clone());
        let state = AppState::new(Some(service), &persona);

        let resp = build_router(state)
            .oneshot(post_json("/generate-response", r#"{"userMessage":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["error"], RELAY_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_upstream_body_returns_500() {
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(|| async { axum::Json(serde_json::json!({ "choices": "nope" })) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let config = RelayConfig {
            base_url: format!("http://{addr}/v1"),
            request_timeout_secs: 5,
            ..RelayConfig::default()
        };
        let persona = Persona::dr_sarcasm();
        let provider = create_provider(&config, Some(secrecy::SecretString::from("sk-test"))).unwrap();
        let service = RelayService::new(provider, &persona, config.model.clone());
        let state = AppState::new(Some(service), &persona);

        let resp = build_router(state)
            .oneshot(post_json("/generate-response", r#"{"userMessage":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], RELAY_FAILURE_MESSAGE);
        assert!(json.get("response").is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_500() {
        let state = AppState::new(None, &Persona::dr_sarcasm());
        let resp = build_router(state)
            .oneshot(post_json("/generate-response", r#"{"userMessage":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["error"], RELAY_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_500() {
        for body in ["not json", r#"{"prompt":"hello"}"#, "{}"] {
            let (state, seen) = state_with(Some("unused"));
            let resp = build_router(state)
                .oneshot(post_json("/generate-response", body))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert!(seen.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_accepted() {
        let (state, _) = state_with(Some("ok"));
        let req = Request::builder()
            .method("POST")
            .uri("/generate-response")
            .body(Body::from(r#"{"userMessage":"hello"}"#))
            .unwrap();
        let resp = build_router(state).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_returns_empty_200_with_cors_headers() {
        let (state, seen) = state_with(Some("unused"));
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/generate-response")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type,apikey")
            .body(Body::empty())
            .unwrap();
        let resp = build_router(state).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers().clone();
        assert_eq!(headers["access-control-allow-origin"], "*");
        let allowed = headers["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .to_lowercase();
        for name in ["authorization", "x-client-info", "apikey", "content-type"] {
            assert!(allowed.contains(name), "missing {name} in {allowed}");
        }

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_reports_upstream_state() {
        let state = AppState::new(None, &Persona::mindcare());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = build_router(state).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["upstream_configured"], false);
    }
}
