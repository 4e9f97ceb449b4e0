//! In-memory page, chart backend, highlighter and client for driving the
//! controller without a browser.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use asymptote_common::AnalysisResponse;
use asymptote_ui::chart::{ChartBackend, ChartHandle, LineChartConfig};
use asymptote_ui::client::{AnalysisClient, AnalysisError};
use asymptote_ui::page::Page;
use asymptote_ui::render::Highlighter;
use asymptote_ui::{Frontend, UiError};
use async_trait::async_trait;
use tokio::sync::oneshot;

// ── Page ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FakePage {
    pub code: String,
    pub spinner_visible: bool,
    /// Every spinner transition, in order.
    pub spinner_history: Vec<bool>,
    pub analysis_output: String,
    pub optimized_code: String,
    pub results_revealed: bool,
    pub feedback: String,
    pub width: f64,
    /// Makes `set_analysis_output` fail, to exercise render failures.
    pub broken_output: bool,
}

impl FakePage {
    pub fn with_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            spinner_visible: false,
            spinner_history: Vec::new(),
            analysis_output: String::new(),
            optimized_code: String::new(),
            results_revealed: false,
            feedback: String::new(),
            width: 1280.0,
            broken_output: false,
        }
    }
}

impl Page for FakePage {
    fn code_input(&self) -> Result<String, UiError> {
        Ok(self.code.clone())
    }

    fn set_spinner_visible(&mut self, visible: bool) -> Result<(), UiError> {
        self.spinner_visible = visible;
        self.spinner_history.push(visible);
        Ok(())
    }

    fn set_analysis_output(&mut self, html: &str) -> Result<(), UiError> {
        if self.broken_output {
            return Err(UiError::MissingElement("analysisOutput".to_string()));
        }
        self.analysis_output = html.to_string();
        Ok(())
    }

    fn set_optimized_code(&mut self, html: &str) -> Result<(), UiError> {
        self.optimized_code = html.to_string();
        Ok(())
    }

    fn reveal_results(&mut self) -> Result<(), UiError> {
        self.results_revealed = true;
        Ok(())
    }

    fn set_feedback(&mut self, html: &str) -> Result<(), UiError> {
        self.feedback = html.to_string();
        Ok(())
    }

    fn viewport_width(&self) -> Result<f64, UiError> {
        Ok(self.width)
    }
}

// ── Charts ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created { id: usize, canvas: String },
    Destroyed { id: usize },
    Resized { id: usize },
}

/// Records every chart created and everything done to it.
#[derive(Default, Clone)]
pub struct FakeCharts {
    pub events: Rc<RefCell<Vec<ChartEvent>>>,
    pub configs: Rc<RefCell<Vec<(String, LineChartConfig)>>>,
}

impl FakeCharts {
    pub fn created(&self) -> usize {
        self.events.borrow().iter().filter(|e| matches!(e, ChartEvent::Created { .. })).count()
    }

    pub fn destroyed(&self) -> usize {
        self.events.borrow().iter().filter(|e| matches!(e, ChartEvent::Destroyed { .. })).count()
    }

    /// Config most recently created on `canvas`.
    pub fn latest_config(&self, canvas: &str) -> Option<LineChartConfig> {
        self.configs
            .borrow()
            .iter()
            .rev()
            .find(|(c, _)| c == canvas)
            .map(|(_, config)| config.clone())
    }
}

struct FakeHandle {
    id: usize,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl ChartHandle for FakeHandle {
    fn resize(&self) {
        self.events.borrow_mut().push(ChartEvent::Resized { id: self.id });
    }

    fn destroy(self: Box<Self>) {
        self.events.borrow_mut().push(ChartEvent::Destroyed { id: self.id });
    }
}

impl ChartBackend for FakeCharts {
    fn create(
        &mut self,
        canvas_id: &str,
        config: &LineChartConfig,
    ) -> Result<Box<dyn ChartHandle>, UiError> {
        let id = self.created();
        self.events.borrow_mut().push(ChartEvent::Created { id, canvas: canvas_id.to_string() });
        self.configs.borrow_mut().push((canvas_id.to_string(), config.clone()));
        Ok(Box::new(FakeHandle { id, events: self.events.clone() }))
    }
}

// ── Highlighter ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CountingHighlighter {
    pub calls: usize,
}

impl Highlighter for CountingHighlighter {
    fn highlight_all(&mut self) {
        self.calls += 1;
    }
}

pub type TestFrontend = Frontend<FakePage, FakeCharts, CountingHighlighter>;

pub fn frontend(code: &str) -> (RefCell<TestFrontend>, FakeCharts) {
    let charts = FakeCharts::default();
    let frontend = Frontend::new(FakePage::with_code(code), charts.clone(), CountingHighlighter::default());
    (RefCell::new(frontend), charts)
}

// ── Client ────────────────────────────────────────────────────────────────────

type Outcome = Result<AnalysisResponse, AnalysisError>;

/// Answers immediately with a fixed outcome and counts calls.
pub struct ImmediateClient {
    outcome: Outcome,
    pub calls: RefCell<Vec<String>>,
}

impl ImmediateClient {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome, calls: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl AnalysisClient for ImmediateClient {
    async fn analyze(&self, code: &str) -> Outcome {
        self.calls.borrow_mut().push(code.to_string());
        self.outcome.clone()
    }
}

/// Each request waits until the test releases the answer for its code.
#[derive(Default)]
pub struct GatedClient {
    gates: RefCell<HashMap<String, oneshot::Receiver<Outcome>>>,
}

impl GatedClient {
    pub fn gate(&self, code: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(code.to_string(), rx);
        tx
    }
}

#[async_trait(?Send)]
impl AnalysisClient for GatedClient {
    async fn analyze(&self, code: &str) -> Outcome {
        let rx = self.gates.borrow_mut().remove(code).expect("no gate registered for code");
        rx.await.unwrap_or_else(|_| Err(AnalysisError::Network("gate dropped".to_string())))
    }
}
