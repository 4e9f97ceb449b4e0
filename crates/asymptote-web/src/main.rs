//! Asymptote web server
//!
//! Run with: cargo run -p asymptote-web

use std::sync::Arc;

use anyhow::Context;
use asymptote_config::Config;
use asymptote_llm::{build_backend, Analyzer};
use asymptote_web::{router::build_router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("asymptote=debug,info")),
        )
        .init();

    info!("Starting Asymptote web server...");

    let config = Config::load().context("loading configuration")?;
    let backend = build_backend(&config.llm).context("building LLM backend")?;
    info!(model = backend.model_id(), local = backend.is_local(), "LLM backend ready");

    let analyzer = Analyzer::new(backend)
        .with_limits(config.llm.max_tokens, config.llm.temperature);
    let state = AppState::new(Arc::new(analyzer), &config.server)?;
    let app = build_router(state, &config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
