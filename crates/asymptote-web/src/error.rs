//! JSON error bodies for the API: `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use asymptote_llm::AnalyzeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No code provided.")]
    NoCode,
    #[error("Could not analyze the code.")]
    AnalysisFailed,
    #[error("Invalid JSON response from the model.")]
    InvalidModelJson,
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoCode => StatusCode::BAD_REQUEST,
            Self::AnalysisFailed | Self::InvalidModelJson | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::EmptyCode => Self::NoCode,
            AnalyzeError::InvalidJson(e) => {
                tracing::error!("JSON decode error in model output: {e}");
                Self::InvalidModelJson
            }
            AnalyzeError::Backend(e) => {
                tracing::error!("LLM backend failed: {e}");
                Self::AnalysisFailed
            }
            AnalyzeError::EmptyCompletion => {
                tracing::warn!("Model returned no candidates");
                Self::AnalysisFailed
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Template details stay in the log.
            Self::Template(e) => {
                tracing::error!("Rendering page failed: {e}");
                "Could not render the page.".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
