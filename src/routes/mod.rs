//! Router assembly.

mod api;
mod common;

pub use api::{api_routes, not_found};
pub use common::common_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;

/// Every route plus the unmatched-request fallback.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .fallback(not_found)
}

/// [`app`] with request bodies capped at `limit` bytes. Oversize bodies are
/// rejected by the JSON extractor, so they answer in the usual `{msg}` shape.
pub fn app_with_body_limit(state: AppState, limit: usize) -> Router {
    app(state).layer(DefaultBodyLimit::max(limit))
}
