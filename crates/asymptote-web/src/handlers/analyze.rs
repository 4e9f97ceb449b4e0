//! `POST /analyze`: one model call per request.

use axum::{extract::State, Json};
use asymptote_common::AnalysisRequest;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::SharedState;

/// Returns the model's JSON verbatim. The body is not checked against the
/// analysis shape; the page reports a missing `timeComplexity` itself.
pub async fn analyze(
    State(state): State<SharedState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(bytes = req.code.len(), model = state.analyzer.model_id(), "Analyzing code");
    let analysis = state.analyzer.analyze(&req.code).await?;
    Ok(Json(analysis))
}
