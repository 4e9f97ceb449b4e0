//! asymptote-common: Shared types, errors, and the trendline generator used
//! by the analysis service and the browser front end.

pub mod error;
pub mod model;
pub mod trendline;

// Re-export commonly used types
pub use error::{AsymptoteError, Result};
pub use model::{AnalysisRequest, AnalysisResponse, ComplexityLabel, ComplexityTriple};
pub use trendline::{input_sizes, space_trendline, trendline, Trendline, TRENDLINE_POINTS};
