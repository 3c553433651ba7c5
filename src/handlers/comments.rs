//! Comment handlers scoped under a review.

use crate::error::AppError;
use crate::handlers::{json_body, parse_review_id};
use crate::response;
use crate::service::comments;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let rows = comments::list_for_review(state.db.as_ref(), review_id).await?;
    Ok(response::ok("comments", rows)?)
}

pub async fn create(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let body = json_body(body)?;
    let comment = comments::add_to_review(state.db.as_ref(), review_id, &body).await?;
    tracing::info!(review_id, comment_id = comment.comment_id, "comment created");
    Ok(response::created("comment", comment)?)
}
