//! Shared application state for the web server.

use std::sync::Arc;

use asymptote_config::ServerConfig;
use asymptote_llm::Analyzer;
use minijinja::Environment;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    /// Page title shown in the header and `<title>`.
    pub title: String,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>, server: &ServerConfig) -> Result<Self, minijinja::Error> {
        let mut templates = Environment::new();
        templates.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self { analyzer, title: server.title.clone(), templates })
    }
}

pub type SharedState = Arc<AppState>;
