//! Resource routes under /api.

use crate::error::AppError;
use crate::handlers::{categories, comments, reviews, users};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Catch-all for unmatched paths and methods.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(categories::list).fallback(not_found))
        .route("/api/reviews", get(reviews::list).fallback(not_found))
        .route(
            "/api/reviews/:review_id",
            get(reviews::read).patch(reviews::update_votes).fallback(not_found),
        )
        .route(
            "/api/reviews/:review_id/comments",
            get(comments::list).post(comments::create).fallback(not_found),
        )
        .route("/api/users", get(users::list).fallback(not_found))
        .with_state(state)
}
