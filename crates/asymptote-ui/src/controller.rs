//! The submit → fetch → render flow and the state it owns.
//!
//! [`AnalysisUi`] owns the two chart slots and a generation counter. Every
//! submission takes the next generation; a response is applied only if its
//! generation is still the latest, so a slow first request can never
//! overwrite the result of a faster second one.

use std::cell::RefCell;

use asymptote_common::AnalysisResponse;

use crate::chart::{ChartBackend, ChartKind, ChartSlot, LineChartConfig};
use crate::client::{AnalysisClient, AnalysisError};
use crate::error::UiError;
use crate::feedback::report_error;
use crate::page::Page;
use crate::render::{display_results, Highlighter};

/// Shown when the page itself fails while rendering a good response.
const RENDER_FAILED: &str = "Error: An error occurred while analyzing the code.";

/// A request in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    code: String,
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// What [`AnalysisUi::complete`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Results and both charts are on the page.
    Rendered,
    /// An error line was shown instead.
    Reported(String),
    /// A newer submission exists; nothing on the page changed.
    Stale,
}

#[derive(Debug)]
pub struct AnalysisUi {
    latest: u64,
    time_chart: ChartSlot,
    space_chart: ChartSlot,
}

impl Default for AnalysisUi {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisUi {
    pub fn new() -> Self {
        Self {
            latest: 0,
            time_chart: ChartSlot::new(ChartKind::Time),
            space_chart: ChartSlot::new(ChartKind::Space),
        }
    }

    pub fn time_chart(&self) -> &ChartSlot {
        &self.time_chart
    }

    pub fn space_chart(&self) -> &ChartSlot {
        &self.space_chart
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, submission: &Submission) -> bool {
        submission.generation == self.latest
    }

    /// Read the code, show the spinner and hand out the next generation.
    pub fn begin_submission(&mut self, page: &mut dyn Page) -> Result<Submission, UiError> {
        let code = page.code_input()?;
        self.latest += 1;
        page.set_spinner_visible(true)?;
        tracing::debug!(generation = self.latest, bytes = code.len(), "Submitting code for analysis");
        Ok(Submission { generation: self.latest, code })
    }

    /// Apply the outcome of `submission`.
    ///
    /// For the latest submission the spinner is hidden before anything else
    /// happens, so neither an error response nor a failing renderer can leave
    /// it spinning.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<AnalysisResponse, AnalysisError>,
        page: &mut dyn Page,
        charts: &mut dyn ChartBackend,
        highlighter: &mut dyn Highlighter,
    ) -> Applied {
        if !self.is_current(&submission) {
            tracing::debug!(
                generation = submission.generation,
                latest = self.latest,
                "Discarding stale analysis response"
            );
            return Applied::Stale;
        }

        if let Err(e) = page.set_spinner_visible(false) {
            tracing::error!("Could not hide spinner: {e}");
        }

        match outcome {
            Ok(resp) => match self.render(&resp, page, charts, highlighter) {
                Ok(()) => {
                    tracing::info!(generation = submission.generation, "Analysis rendered");
                    Applied::Rendered
                }
                Err(e) => {
                    tracing::error!("Rendering analysis failed: {e}");
                    report(page, RENDER_FAILED)
                }
            },
            Err(e) => {
                tracing::warn!(generation = submission.generation, "Analysis failed: {e}");
                report(page, e.user_message())
            }
        }
    }

    fn render(
        &mut self,
        resp: &AnalysisResponse,
        page: &mut dyn Page,
        charts: &mut dyn ChartBackend,
        highlighter: &mut dyn Highlighter,
    ) -> Result<(), UiError> {
        display_results(page, highlighter, resp)?;
        self.create_charts(resp, page.viewport_width()?, charts)
    }

    /// Replace both charts. Fonts follow `viewport_width` as of now.
    pub fn create_charts(
        &mut self,
        resp: &AnalysisResponse,
        viewport_width: f64,
        charts: &mut dyn ChartBackend,
    ) -> Result<(), UiError> {
        let time = LineChartConfig::for_complexity(ChartKind::Time, &resp.time_complexity, viewport_width);
        self.time_chart.replace(charts, &time)?;

        let space = LineChartConfig::for_complexity(ChartKind::Space, &resp.space_complexity, viewport_width);
        self.space_chart.replace(charts, &space)
    }

    /// Window resize: re-fit live charts, nothing else.
    pub fn on_resize(&self) {
        self.time_chart.resize();
        self.space_chart.resize();
    }
}

fn report(page: &mut dyn Page, message: &str) -> Applied {
    if let Err(e) = report_error(page, message) {
        tracing::error!("Could not show error message: {e}");
    }
    Applied::Reported(message.to_string())
}

/// The controller together with the page it drives.
pub struct Frontend<P, C, H> {
    pub ui: AnalysisUi,
    pub page: P,
    pub charts: C,
    pub highlighter: H,
}

impl<P: Page, C: ChartBackend, H: Highlighter> Frontend<P, C, H> {
    pub fn new(page: P, charts: C, highlighter: H) -> Self {
        Self { ui: AnalysisUi::new(), page, charts, highlighter }
    }

    pub fn begin(&mut self) -> Result<Submission, UiError> {
        self.ui.begin_submission(&mut self.page)
    }

    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<AnalysisResponse, AnalysisError>,
    ) -> Applied {
        self.ui.complete(
            submission,
            outcome,
            &mut self.page,
            &mut self.charts,
            &mut self.highlighter,
        )
    }

    pub fn on_resize(&self) {
        self.ui.on_resize();
    }
}

/// Handle one form submission end to end: exactly one request, no retries.
///
/// The `RefCell` is only borrowed before and after the request, never across
/// it, so other submissions and resize events can run while it is pending.
pub async fn run_submission<P, C, H, A>(frontend: &RefCell<Frontend<P, C, H>>, client: &A) -> Applied
where
    P: Page,
    C: ChartBackend,
    H: Highlighter,
    A: AnalysisClient + ?Sized,
{
    let begun = frontend.borrow_mut().begin();
    let submission = match begun {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("Could not start submission: {e}");
            let mut frontend = frontend.borrow_mut();
            if let Err(e) = frontend.page.set_spinner_visible(false) {
                tracing::error!("Could not hide spinner: {e}");
            }
            return report(&mut frontend.page, RENDER_FAILED);
        }
    };

    let outcome = client.analyze(submission.code()).await;
    frontend.borrow_mut().complete(submission, outcome)
}
