//! Textual results: the complexity summary and the optimized code block.

use asymptote_common::{AnalysisResponse, ComplexityTriple};

use crate::error::UiError;
use crate::page::Page;

pub const NO_SUMMARY: &str = "No summary provided.";
pub const NO_OPTIMIZED_CODE: &str = "No optimized code provided.";

/// Syntax highlighter that restyles every `<code class="language-*">` block.
pub trait Highlighter {
    fn highlight_all(&mut self);
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn complexity_block(heading: &str, triple: &ComplexityTriple) -> String {
    format!(
        r#"<strong class="text-gray-800">{heading}:</strong><br>
<span class="text-gray-600">Best Case: {}</span><br>
<span class="text-gray-600">Average Case: {}</span><br>
<span class="text-gray-600">Worst Case: {}</span><br>
"#,
        escape_html(&triple.best_case),
        escape_html(&triple.average_case),
        escape_html(&triple.worst_case),
    )
}

/// Inner HTML for `#analysisOutput`.
pub fn analysis_html(resp: &AnalysisResponse) -> String {
    let summary = resp.summary.as_deref().filter(|s| !s.is_empty()).unwrap_or(NO_SUMMARY);
    format!(
        r#"{}{}<strong class="text-gray-800">Summary:</strong> <span class="text-gray-600">{}</span>"#,
        complexity_block("Time Complexity", &resp.time_complexity),
        complexity_block("Space Complexity", &resp.space_complexity),
        escape_html(summary),
    )
}

/// Inner HTML for `#optimizedCode`.
pub fn optimized_code_html(resp: &AnalysisResponse) -> String {
    let code = resp
        .optimized_code
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_OPTIMIZED_CODE);
    format!(r#"<pre><code class="language-js">{}</code></pre>"#, escape_html(code))
}

/// Fill both result panels, highlight, then reveal `#analysisResult`.
pub fn display_results(
    page: &mut dyn Page,
    highlighter: &mut dyn Highlighter,
    resp: &AnalysisResponse,
) -> Result<(), UiError> {
    page.set_analysis_output(&analysis_html(resp))?;
    page.set_optimized_code(&optimized_code_html(resp))?;
    highlighter.highlight_all();
    page.reveal_results()
}
