//! Response records and the mapping from raw JSON rows into them.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub review_img_url: String,
    pub owner: String,
    pub category: String,
    pub votes: i64,
    pub created_at: String,
}

/// A review with the number of comments on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub review: Review,
    #[serde(deserialize_with = "count_as_string")]
    pub comment_count: String,
}

/// Listing row: no body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub owner: String,
    pub title: String,
    pub review_id: i64,
    pub category: String,
    pub review_img_url: String,
    pub created_at: String,
    pub votes: i64,
    pub designer: String,
    #[serde(deserialize_with = "count_as_string")]
    pub comment_count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub author: String,
    pub review_id: i64,
    pub votes: i64,
    pub created_at: String,
}

/// Counts go out as strings; the cell may arrive as either.
fn count_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Text(String),
    }
    Ok(match Count::deserialize(deserializer)? {
        Count::Int(n) => n.to_string(),
        Count::Text(s) => s,
    })
}

pub fn map_one<T: DeserializeOwned>(row: Value) -> Result<T, AppError> {
    Ok(serde_json::from_value(row)?)
}

pub fn map_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, AppError> {
    rows.into_iter().map(map_one).collect()
}
