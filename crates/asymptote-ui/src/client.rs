//! One-shot client for `POST /analyze`.

use asymptote_common::{AnalysisRequest, AnalysisResponse, AsymptoteError};
use async_trait::async_trait;
use thiserror::Error;

/// Why an analysis could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The request never produced a JSON body: connection refused, aborted,
    /// or the server answered with something that is not JSON.
    #[error("Network error: {0}")]
    Network(String),

    /// The body was JSON but not an analysis (an `{"error": …}` body, a model
    /// that ignored the requested keys, …).
    #[error("Unexpected response: {0}")]
    Schema(String),
}

impl AnalysisError {
    /// Text shown in `#feedbackMessage`.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Error: An error occurred while analyzing the code.",
            Self::Schema(_) => "Error: Could not analyze the code.",
        }
    }
}

impl From<AsymptoteError> for AnalysisError {
    fn from(err: AsymptoteError) -> Self {
        Self::Schema(err.to_string())
    }
}

/// Sends code to the analysis service. Futures are not `Send` because the
/// browser implementation runs on the page's single thread.
#[async_trait(?Send)]
pub trait AnalysisClient {
    async fn analyze(&self, code: &str) -> Result<AnalysisResponse, AnalysisError>;
}

pub struct HttpAnalysisClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// `base_url` is the page origin, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            endpoint: format!("{}/analyze", base_url.as_ref().trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, code: &str) -> Result<AnalysisResponse, AnalysisError> {
        // `.json()` sets `Content-Type: application/json`.
        let resp = self.client
            .post(&self.endpoint)
            .json(&AnalysisRequest::new(code))
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| AnalysisError::Network(e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::Network(format!("invalid JSON body: {e}")))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %value, "Analysis request rejected");
        }

        Ok(AnalysisResponse::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(HttpAnalysisClient::new("http://localhost:5000").endpoint(), "http://localhost:5000/analyze");
        assert_eq!(HttpAnalysisClient::new("http://localhost:5000/").endpoint(), "http://localhost:5000/analyze");
    }

    #[test]
    fn test_user_messages_differ_by_kind() {
        let network = AnalysisError::Network("refused".into());
        let schema = AnalysisError::Schema("missing".into());
        assert_eq!(network.user_message(), "Error: An error occurred while analyzing the code.");
        assert_eq!(schema.user_message(), "Error: Could not analyze the code.");
    }

    #[test]
    fn test_missing_field_maps_to_schema() {
        let err: AnalysisError = AsymptoteError::MissingField("timeComplexity").into();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }
}
