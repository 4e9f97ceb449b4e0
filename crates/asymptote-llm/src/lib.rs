//! asymptote-llm: LLM backend abstraction and the complexity-analysis
//! prompt that sits behind `POST /analyze`.

pub mod analysis;
pub mod backend;

pub use analysis::{AnalyzeError, Analyzer};
pub use backend::{build_backend, LlmBackend, LlmError, LlmRequest, LlmResponse, Message};
