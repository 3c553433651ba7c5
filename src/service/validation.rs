//! Request body validation for the two mutation endpoints.

use crate::error::AppError;
use serde_json::Value;

fn bad_request() -> AppError {
    AppError::BadRequest("Bad Request".into())
}

/// `{inc_votes: integer}`; zero is rejected along with absent and non-integer
/// values. The increment must fit the `votes` column (int4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteUpdate {
    pub inc_votes: i32,
}

impl VoteUpdate {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let inc_votes = body
            .get("inc_votes")
            .and_then(Value::as_i64)
            .and_then(|n| i32::try_from(n).ok())
            .filter(|n| *n != 0)
            .ok_or_else(bad_request)?;
        Ok(VoteUpdate { inc_votes })
    }
}

/// `{username, body}`; both must be non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewComment {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .ok_or_else(bad_request)
        };
        Ok(NewComment {
            username: field("username")?,
            body: field("body")?,
        })
    }
}
