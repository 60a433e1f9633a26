//! Competitor analysis and chat routes.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use competitor_analysis::{AnalysisError, FetchedContent, SiteId};

use crate::server::app::AppState;
use crate::server::routes::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub base_url: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub base_url: String,
    pub filtered_content: FetchedContent,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    pub base_url: String,
    pub query: String,
}

#[derive(Serialize)]
pub struct ChatResponseBody {
    pub response: String,
}

/// Analyze a competitor site and hold its index for chat.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.analysis.analyze(&params.base_url).await {
        Ok(report) => Ok(Json(AnalyzeResponse {
            base_url: params.base_url,
            filtered_content: report.into_content(),
        })),
        Err(AnalysisError::InvalidBaseUrl(url)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: format!("base_url has no host: {}", url),
            }),
        )),
        Err(e) => {
            error!(error = %e, "Analysis failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}

/// Answer a question against a previously analyzed site.
pub async fn chat_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ChatRequestBody>,
) -> Result<Json<ChatResponseBody>, (StatusCode, Json<ErrorResponse>)> {
    let Some(site) = SiteId::from_url(&request.base_url) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: format!("base_url has no host: {}", request.base_url),
            }),
        ));
    };

    match state.analysis.chat(&site, &request.query).await {
        Some(response) => Ok(Json(ChatResponseBody { response })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: "No vectorstore available for the given base URL.".to_string(),
            }),
        )),
    }
}
