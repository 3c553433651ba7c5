//! Failure classifier chain: ordered stages, first match produces the response.

use crate::error::AppError;
use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Malformed input syntax, e.g. text where an integer was expected.
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// Reference to a column that does not exist.
pub const UNDEFINED_COLUMN: &str = "42703";

type Stage = fn(&AppError) -> Option<(StatusCode, String)>;

/// Evaluated top-down; anything no stage claims becomes a 500.
pub const CHAIN: &[(&str, Stage)] = &[
    ("invalid_endpoint", invalid_endpoint),
    ("custom", custom_errors),
    ("datastore", datastore_errors),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub stage: &'static str,
    pub status: StatusCode,
    pub msg: String,
}

pub fn classify(err: &AppError) -> Classified {
    for &(stage, matches) in CHAIN {
        if let Some((status, msg)) = matches(err) {
            return Classified { stage, status, msg };
        }
    }
    let (status, msg) = server_errors(err);
    Classified {
        stage: "server",
        status,
        msg,
    }
}

fn invalid_endpoint(err: &AppError) -> Option<(StatusCode, String)> {
    match err {
        AppError::RouteNotFound => Some((StatusCode::NOT_FOUND, "Not Found".into())),
        _ => None,
    }
}

fn custom_errors(err: &AppError) -> Option<(StatusCode, String)> {
    let (status, msg) = match err {
        AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        AppError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid Id".into()),
        AppError::InvalidCategoryQuery
        | AppError::InvalidSortQuery
        | AppError::InvalidOrderQuery => (StatusCode::BAD_REQUEST, err.to_string()),
        _ => return None,
    };
    tracing::debug!(status = status.as_u16(), msg = %msg, "custom error");
    Some((status, msg))
}

fn datastore_errors(err: &AppError) -> Option<(StatusCode, String)> {
    let code = err.datastore_code()?;
    let msg = match code {
        INVALID_TEXT_REPRESENTATION => "Invalid Id",
        UNDEFINED_COLUMN => "Bad Request",
        _ => return None,
    };
    tracing::warn!(code, error = %err, "datastore error");
    Some((StatusCode::BAD_REQUEST, msg.into()))
}

fn server_errors(err: &AppError) -> (StatusCode, String) {
    tracing::error!(error = %err, "unhandled error");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".into())
}

impl IntoResponse for Classified {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { msg: self.msg })).into_response()
    }
}
