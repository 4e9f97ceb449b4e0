//! The analysis page.

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::error::ApiError;
use crate::state::{SharedState, INDEX_TEMPLATE};

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let page = state
        .templates
        .get_template(INDEX_TEMPLATE)?
        .render(context! { title => state.title })?;
    Ok(Html(page))
}
