use thiserror::Error;

/// Failures while touching the page, as opposed to failures of the analysis
/// request itself (see [`crate::client::AnalysisError`]).
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Element #{0} not found")]
    MissingElement(String),

    #[error("Element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("DOM error: {0}")]
    Dom(String),
}
