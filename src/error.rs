//! Typed errors. HTTP mapping lives in [`crate::classify`].

use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Startup failures: bad environment values.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No route consumed the request.
    #[error("no route matched")]
    RouteNotFound,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("non-numeric id")]
    InvalidId,
    #[error("invalid category query")]
    InvalidCategoryQuery,
    #[error("invalid sort query")]
    InvalidSortQuery,
    #[error("invalid order query")]
    InvalidOrderQuery,
    /// Failure reported by the datastore. `code` is the SQLSTATE and
    /// `constraint` the violated constraint, when the server returned them.
    #[error("datastore: {message}")]
    Datastore {
        code: Option<String>,
        constraint: Option<String>,
        message: String,
    },
    /// Row did not decode into a response shape, or a shape did not encode.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn datastore_code(&self) -> Option<&str> {
        match self {
            AppError::Datastore { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn datastore_constraint(&self) -> Option<&str> {
        match self {
            AppError::Datastore { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let db = e.as_database_error();
        let code = db.and_then(|d| d.code()).map(|c| c.into_owned());
        let constraint = db.and_then(|d| d.constraint()).map(String::from);
        AppError::Datastore {
            code,
            constraint,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        crate::classify::classify(&self).into_response()
    }
}
