use std::collections::BTreeMap;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use slangster_analysis::{ConversationFlow, EmotionCatalogEntry, Suggestion, TextAnalysis};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Hard cap on the number of messages a single flow request may carry.
const MAX_CONVERSATION_MESSAGES: usize = 200;

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub include_intensity: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeData {
    #[serde(flatten)]
    pub analysis: TextAnalysis,
    pub intensity: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SuggestRequest {
    #[serde(alias = "target_emotion")]
    pub emotion: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SuggestData {
    pub emotion: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConversationFlowRequest {
    pub messages: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub(super) struct EmotionCatalogData {
    pub emotions: BTreeMap<String, EmotionCatalogEntry>,
    pub total: usize,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeData>>, ApiError> {
    let Some(text) = body.text else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "text is required",
        ));
    };

    let analysis = state.engine.emotions().analyze(&text);
    let intensity = body
        .include_intensity
        .then(|| state.engine.emotions().intensity(&text));

    Ok(Json(ApiResponse {
        data: AnalyzeData {
            analysis,
            intensity,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn suggest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SuggestRequest>,
) -> Result<Json<ApiResponse<SuggestData>>, ApiError> {
    let Some(emotion) = body.emotion else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "emotion is required",
        ));
    };

    let suggestions = state.engine.emotions().suggest(&emotion);

    Ok(Json(ApiResponse {
        data: SuggestData {
            emotion: emotion.to_lowercase(),
            suggestions,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn conversation_flow(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ConversationFlowRequest>,
) -> Result<Json<ApiResponse<ConversationFlow>>, ApiError> {
    let Some(messages) = body.messages else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "messages is required",
        ));
    };
    if messages.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "messages must contain at least one entry",
        ));
    }
    if messages.len() > MAX_CONVERSATION_MESSAGES {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "too many messages in one request",
        ));
    }

    let flow = state.engine.conversation_flow(&messages);

    Ok(Json(ApiResponse {
        data: flow,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_emotions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<EmotionCatalogData>> {
    let emotions = state.engine.emotions().emotion_catalog();
    let total = emotions.len();

    Json(ApiResponse {
        data: EmotionCatalogData { emotions, total },
        meta: ResponseMeta::new(req_id.0),
    })
}
