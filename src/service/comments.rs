//! Comment accessors. Both check the review exists before touching comments,
//! so an uncommented review lists as `[]` rather than 404.

use crate::error::AppError;
use crate::model::{map_one, map_rows, Comment};
use crate::service::reviews::{ensure_exists, review_not_found};
use crate::service::validation::NewComment;
use crate::service::Executor;
use crate::sql::{insert_comment, select_comments_by_review};
use serde_json::Value;

/// SQLSTATE for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Default Postgres name of the `comments.review_id` foreign key.
const REVIEW_FOREIGN_KEY: &str = "comments_review_id_fkey";

pub async fn list_for_review(
    db: &dyn Executor,
    review_id: i64,
) -> Result<Vec<Comment>, AppError> {
    ensure_exists(db, review_id).await?;
    map_rows(db.fetch_all(&select_comments_by_review(review_id)).await?)
}

pub async fn add_to_review(
    db: &dyn Executor,
    review_id: i64,
    body: &Value,
) -> Result<Comment, AppError> {
    let comment = NewComment::from_body(body)?;
    ensure_exists(db, review_id).await?;
    let row = db
        .fetch_optional(&insert_comment(review_id, &comment.username, &comment.body))
        .await
        .map_err(missing_reference)?
        .ok_or_else(|| AppError::Datastore {
            code: None,
            constraint: None,
            message: "insert returned no row".into(),
        })?;
    map_one(row)
}

/// The review can vanish between the existence check and the insert, so the
/// violated constraint decides which reference was missing.
fn missing_reference(e: AppError) -> AppError {
    if e.datastore_code() != Some(FOREIGN_KEY_VIOLATION) {
        return e;
    }
    match e.datastore_constraint() {
        Some(REVIEW_FOREIGN_KEY) => review_not_found(),
        _ => AppError::NotFound("user does not exist".into()),
    }
}
