//! Response envelopes: every payload sits under a single named key.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub msg: String,
}

fn named<T: Serialize>(key: &str, data: T) -> Result<Json<Value>, serde_json::Error> {
    let mut body = Map::new();
    body.insert(key.to_string(), serde_json::to_value(data)?);
    Ok(Json(Value::Object(body)))
}

/// `200 {key: data}`.
pub fn ok<T: Serialize>(
    key: &str,
    data: T,
) -> Result<(StatusCode, Json<Value>), serde_json::Error> {
    Ok((StatusCode::OK, named(key, data)?))
}

/// `201 {key: data}`.
pub fn created<T: Serialize>(
    key: &str,
    data: T,
) -> Result<(StatusCode, Json<Value>), serde_json::Error> {
    Ok((StatusCode::CREATED, named(key, data)?))
}
