//! Review handlers: list, read, vote.

use crate::error::AppError;
use crate::handlers::{json_body, parse_review_id};
use crate::response;
use crate::service::reviews;
use crate::sql::ReviewListQuery;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ReviewListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected query string");
        AppError::BadRequest("Bad Request".into())
    })?;
    let rows = reviews::list(state.db.as_ref(), &query).await?;
    Ok(response::ok("reviews", rows)?)
}

pub async fn read(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let review = reviews::find_by_id(state.db.as_ref(), review_id).await?;
    Ok(response::ok("review", review)?)
}

pub async fn update_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let body = json_body(body)?;
    let review = reviews::apply_votes(state.db.as_ref(), review_id, &body).await?;
    Ok(response::ok("review", review)?)
}
