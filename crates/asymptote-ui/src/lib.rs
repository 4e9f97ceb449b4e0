//! asymptote-ui: the analysis page's front end.
//!
//! The page submits code to `POST /analyze`, prints the returned complexity
//! labels and draws two trendline charts. Everything except the browser glue
//! in [`wasm`] is target-independent and talks to the page through the
//! [`Page`], [`ChartBackend`] and [`Highlighter`] traits.

pub mod chart;
pub mod client;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod page;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use chart::{ChartBackend, ChartHandle, ChartKind, ChartSlot, FontPreset, LineChartConfig};
pub use client::{AnalysisClient, AnalysisError, HttpAnalysisClient};
pub use controller::{run_submission, AnalysisUi, Applied, Frontend, Submission};
pub use error::UiError;
pub use page::Page;
pub use render::Highlighter;
