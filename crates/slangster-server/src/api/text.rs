use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use slangster_analysis::TextReport;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct TextAnalyzeRequest {
    pub text: Option<String>,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<TextAnalyzeRequest>,
) -> Result<Json<ApiResponse<TextReport>>, ApiError> {
    let Some(text) = body.text else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "text is required",
        ));
    };

    let report = state.engine.analyze_text(&text);

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
