//! HTTP handlers: parse path and body, call the accessor, wrap the result.

pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

/// Path ids must be integers; anything else is rejected before the datastore sees it.
pub(crate) fn parse_review_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId)
}

/// Unparseable or non-object bodies are a plain 400.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(v @ Value::Object(_))) => Ok(v),
        Ok(_) => Err(AppError::BadRequest("Bad Request".into())),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected body");
            Err(AppError::BadRequest("Bad Request".into()))
        }
    }
}
