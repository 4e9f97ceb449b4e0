//! The slice of the DOM the analysis page depends on.

use crate::error::UiError;

/// Element IDs the page template must provide.
pub mod ids {
    pub const CODE_FORM: &str = "codeForm";
    pub const CODE_INPUT: &str = "codeInput";
    pub const SPINNER: &str = "spinner";
    pub const ANALYSIS_OUTPUT: &str = "analysisOutput";
    pub const OPTIMIZED_CODE: &str = "optimizedCode";
    pub const ANALYSIS_RESULT: &str = "analysisResult";
    pub const FEEDBACK_MESSAGE: &str = "feedbackMessage";
    pub const TIME_COMPLEXITY_CHART: &str = "timeComplexityChart";
    pub const SPACE_COMPLEXITY_CHART: &str = "spaceComplexityChart";

    pub const ALL: [&str; 9] = [
        CODE_FORM,
        CODE_INPUT,
        SPINNER,
        ANALYSIS_OUTPUT,
        OPTIMIZED_CODE,
        ANALYSIS_RESULT,
        FEEDBACK_MESSAGE,
        TIME_COMPLEXITY_CHART,
        SPACE_COMPLEXITY_CHART,
    ];
}

/// Class that keeps `#analysisResult` hidden until the first result.
pub const HIDDEN_CLASS: &str = "hidden";

/// Viewport widths below this use the compact chart fonts.
pub const COMPACT_VIEWPORT_PX: f64 = 640.0;

pub trait Page {
    /// Current text of `#codeInput`.
    fn code_input(&self) -> Result<String, UiError>;

    /// Show (`display: flex`) or hide (`display: none`) `#spinner`.
    fn set_spinner_visible(&mut self, visible: bool) -> Result<(), UiError>;

    /// Replace the inner HTML of `#analysisOutput`.
    fn set_analysis_output(&mut self, html: &str) -> Result<(), UiError>;

    /// Replace the inner HTML of `#optimizedCode`.
    fn set_optimized_code(&mut self, html: &str) -> Result<(), UiError>;

    /// Drop [`HIDDEN_CLASS`] from `#analysisResult`.
    fn reveal_results(&mut self) -> Result<(), UiError>;

    /// Replace the inner HTML of `#feedbackMessage`.
    fn set_feedback(&mut self, html: &str) -> Result<(), UiError>;

    /// `window.innerWidth` in CSS pixels.
    fn viewport_width(&self) -> Result<f64, UiError>;
}
