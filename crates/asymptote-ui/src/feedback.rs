//! The single error line under the form.

use crate::error::UiError;
use crate::page::Page;
use crate::render::escape_html;

pub fn error_html(message: &str) -> String {
    format!(r#"<div class="text-red-600">{}</div>"#, escape_html(message))
}

/// Replace whatever `#feedbackMessage` holds with `message`.
pub fn report_error(page: &mut dyn Page, message: &str) -> Result<(), UiError> {
    tracing::warn!(feedback = message, "Reporting analysis failure");
    page.set_feedback(&error_html(message))
}
