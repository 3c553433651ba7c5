//! Review accessors: listing, lookup and vote updates.

use crate::error::AppError;
use crate::model::{map_one, map_rows, Review, ReviewDetail, ReviewSummary};
use crate::service::validation::VoteUpdate;
use crate::service::Executor;
use crate::sql::{
    review_exists, select_review_by_id, select_reviews, update_review_votes, ReviewListQuery,
};
use serde_json::Value;

pub(crate) fn review_not_found() -> AppError {
    AppError::NotFound("review does not exist".into())
}

/// Invalid query parameters are rejected before anything is executed.
pub async fn list(
    db: &dyn Executor,
    query: &ReviewListQuery,
) -> Result<Vec<ReviewSummary>, AppError> {
    let q = select_reviews(query)?;
    map_rows(db.fetch_all(&q).await?)
}

pub async fn find_by_id(db: &dyn Executor, review_id: i64) -> Result<ReviewDetail, AppError> {
    let row = db
        .fetch_optional(&select_review_by_id(review_id))
        .await?
        .ok_or_else(review_not_found)?;
    map_one(row)
}

pub async fn apply_votes(
    db: &dyn Executor,
    review_id: i64,
    body: &Value,
) -> Result<Review, AppError> {
    let update = VoteUpdate::from_body(body)?;
    let row = db
        .fetch_optional(&update_review_votes(review_id, update.inc_votes))
        .await?
        .ok_or_else(review_not_found)?;
    map_one(row)
}

pub(crate) async fn ensure_exists(db: &dyn Executor, review_id: i64) -> Result<(), AppError> {
    match db.fetch_optional(&review_exists(review_id)).await? {
        Some(_) => Ok(()),
        None => Err(review_not_found()),
    }
}
