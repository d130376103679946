mod emoticon;
mod text;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use slangster_analysis::AnalysisEngine;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    lexicon_tokens: usize,
    glossary_terms: usize,
    capabilities: &'static [&'static str],
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn limited_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/emoticon/analyze", post(emoticon::analyze))
        .route("/api/v1/emoticon/suggest", post(emoticon::suggest))
        .route(
            "/api/v1/emoticon/conversation-flow",
            post(emoticon::conversation_flow),
        )
        .route("/api/v1/emoticon/emotions", get(emoticon::list_emotions))
        .route("/api/v1/text/analyze", post(text::analyze))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        )))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                lexicon_tokens: state.engine.emotions().lexicon().len(),
                glossary_terms: state.engine.slang().len(),
                capabilities: &[
                    "emoticon_analysis",
                    "emotion_suggestions",
                    "conversation_flow",
                    "slang_detection",
                    "formality_analysis",
                    "sarcasm_detection",
                ],
            },
            meta,
        }),
    )
}

pub fn rate_limit_state(max_per_minute: usize) -> RateLimitState {
    RateLimitState::new(max_per_minute, Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            engine: Arc::new(AnalysisEngine::builtin()),
        };
        build_app(state, rate_limit_state(120))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json parse")
    }

    #[tokio::test]
    async fn health_reports_datasets_and_capabilities() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"].as_str(), Some("ok"));
        assert!(json["data"]["lexicon_tokens"].as_u64().unwrap_or(0) > 50);
        let capabilities = json["data"]["capabilities"].as_array().expect("array");
        assert!(capabilities.iter().any(|c| c == "sarcasm_detection"));
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn request_id_header_is_echoed_back() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response.headers().get("x-request-id").map(|v| v.to_str().ok()),
            Some(Some("req-abc-123"))
        );
        let json = body_json(response).await;
        assert_eq!(json["meta"]["request_id"].as_str(), Some("req-abc-123"));
    }

    #[tokio::test]
    async fn analyze_returns_dominant_emotion() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/analyze",
                serde_json::json!({"text": "I'm so happy today! 😊😀🎉"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["data"]["dominant_emotion"]["emotion"].as_str(),
            Some("happy")
        );
        assert_eq!(json["data"]["total_emoticons"].as_u64(), Some(3));
        assert!(json["data"]["intensity"].is_null());
    }

    #[tokio::test]
    async fn analyze_can_include_intensity() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/analyze",
                serde_json::json!({"text": "😂😂😂😂", "include_intensity": true}),
            ))
            .await
            .expect("response");

        let json = body_json(response).await;
        assert!(json["data"]["intensity"].is_object());
        assert!(json["data"]["intensity"]["joyful"].as_f64().expect("f64") > 0.9);
    }

    #[tokio::test]
    async fn analyze_of_plain_text_returns_the_zero_state() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/analyze",
                serde_json::json!({"text": "no tokens here"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["data"]["dominant_emotion"].is_null());
        assert_eq!(json["data"]["confidence"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn analyze_without_text_is_a_validation_error() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/analyze",
                serde_json::json!({"include_intensity": true}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"].as_str(), Some("validation_error"));
    }

    #[tokio::test]
    async fn suggest_accepts_the_target_emotion_alias() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/suggest",
                serde_json::json!({"target_emotion": "sad"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["emotion"].as_str(), Some("sad"));
        assert!(!json["data"]["suggestions"]
            .as_array()
            .expect("array")
            .is_empty());
    }

    #[tokio::test]
    async fn suggest_returns_ranked_emoticons() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/suggest",
                serde_json::json!({"emotion": "happy"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let suggestions = json["data"]["suggestions"].as_array().expect("array");
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 10);
    }

    #[tokio::test]
    async fn suggest_of_unknown_emotion_is_empty_not_an_error() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/suggest",
                serde_json::json!({"emotion": "tesseract"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["data"]["suggestions"].as_array().map(Vec::len),
            Some(0)
        );
    }

    #[tokio::test]
    async fn conversation_flow_rejects_empty_message_list() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/conversation-flow",
                serde_json::json!({"messages": []}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"].as_str(), Some("validation_error"));
    }

    #[tokio::test]
    async fn conversation_flow_rejects_oversized_message_lists() {
        let messages: Vec<String> = (0..201).map(|i| format!("message {i} 😊")).collect();
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/conversation-flow",
                serde_json::json!({ "messages": messages }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"].as_str(), Some("validation_error"));
    }

    #[tokio::test]
    async fn conversation_flow_summarizes_messages() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/emoticon/conversation-flow",
                serde_json::json!({"messages": ["😊", "😊", "😢"]}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["timeline"].as_array().map(Vec::len), Some(3));
        assert!(json["data"]["emotion_trend"].is_string());
        assert!(json["data"]["stability"].is_number());
    }

    #[tokio::test]
    async fn emotions_catalog_lists_weights_and_tokens() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/emoticon/emotions")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let happy = &json["data"]["emotions"]["happy"];
        assert!(happy["weight"].as_f64().is_some());
        assert!(!happy["emoticons"].as_array().expect("array").is_empty());
    }

    #[tokio::test]
    async fn text_analyze_covers_slang_formality_and_sarcasm() {
        let response = test_app()
            .oneshot(post_json(
                "/api/v1/text/analyze",
                serde_json::json!({"text": "ngl this is bussin, living the dream"}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let slang = json["data"]["slang"].as_array().expect("array");
        assert_eq!(slang[0]["term"].as_str(), Some("ngl"));
        assert!(json["data"]["formality"]["level"].is_string());
        assert_eq!(json["data"]["sarcasm"]["detected"].as_bool(), Some(true));
    }

    #[tokio::test]
    async fn rate_limit_rejects_after_the_window_budget() {
        let state = AppState {
            engine: Arc::new(AnalysisEngine::builtin()),
        };
        let app = build_app(state, rate_limit_state(2));

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/v1/emoticon/emotions")
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/emoticon/emotions")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
