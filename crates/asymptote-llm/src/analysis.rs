//! Complexity analysis on top of an [`LlmBackend`].
//!
//! The model is asked for a JSON document and nothing else. Models still wrap
//! their answer in markdown fences often enough that the fences are stripped
//! before parsing.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::backend::{LlmBackend, LlmError, LlmRequest, Message};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("No code provided.")]
    EmptyCode,
    #[error("LLM backend failed: {0}")]
    Backend(#[from] LlmError),
    #[error("LLM returned an empty completion")]
    EmptyCompletion,
    #[error("Invalid JSON response from the model: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Prompt asking for the structured complexity report.
pub fn build_prompt(code: &str) -> String {
    format!(
        r#"Provide a detailed time and space complexity analysis of the following code in JSON format.
The JSON object should include "timeComplexity" with "bestCase", "averageCase", "worstCase" keys, "spaceComplexity" with the same keys, "summary", and "optimizedCode" containing an improved version of the code.
Use the notation O(1), O(n), O(n^2), O(log n), O(n log n) for every case.

Code:
{code}

Respond only with valid JSON."#
    )
}

/// Remove ```` ```json ```` / ```` ``` ```` fences anywhere in the text and trim.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a completion into JSON after stripping fences.
pub fn parse_completion(text: &str) -> Result<Value, AnalyzeError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(AnalyzeError::EmptyCompletion);
    }
    serde_json::from_str(&cleaned).map_err(AnalyzeError::InvalidJson)
}

/// Runs one analysis per call; no retries.
pub struct Analyzer {
    backend: Arc<dyn LlmBackend>,
    max_tokens: u32,
    temperature: f32,
}

impl Analyzer {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend, max_tokens: 4096, temperature: 0.1 }
    }

    pub fn with_limits(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    /// Ask the model for a complexity report of `code` and return the parsed
    /// JSON as-is. The shape is not validated here; the page decides what it
    /// can render.
    pub async fn analyze(&self, code: &str) -> Result<Value, AnalyzeError> {
        if code.is_empty() {
            return Err(AnalyzeError::EmptyCode);
        }

        let req = LlmRequest {
            messages: vec![Message::user(build_prompt(code))],
            model: None,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let resp = self.backend.complete(req).await?;
        tracing::debug!(
            model = %resp.model,
            prompt_tokens = resp.prompt_tokens,
            completion_tokens = resp.completion_tokens,
            "Analysis completion received"
        );

        parse_completion(&resp.content)
    }
}
