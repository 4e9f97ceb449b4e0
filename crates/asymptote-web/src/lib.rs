//! asymptote-web: HTTP service for the complexity analyzer.
//!   - `GET /`         the analysis page
//!   - `POST /analyze` code in, complexity report out
//!   - `GET /health`   liveness and the active model
//!   - `/static/*`     stylesheet and the compiled front end

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
