//! Builds parameterized statements for every resource. Values are always bound;
//! only whitelist output reaches the SQL text.

use crate::error::AppError;
use crate::sql::whitelist::{is_known_category, SortColumn, SortOrder};
use serde::Deserialize;
use serde_json::Value;

const REVIEW_FIELDS: &[&str] = &[
    "review_id",
    "title",
    "review_body",
    "designer",
    "review_img_url",
    "owner",
    "category",
    "votes",
    "created_at",
];

/// Listing shape: everything except the body.
const REVIEW_SUMMARY_FIELDS: &[&str] = &[
    "owner",
    "title",
    "review_id",
    "category",
    "review_img_url",
    "created_at",
    "votes",
    "designer",
];

const COMMENT_FIELDS: &[&str] =
    &["comment_id", "body", "author", "review_id", "votes", "created_at"];

const COMMENT_COUNT: &str = "COUNT(comments.comment_id) AS comment_count";

const REVIEWS_JOIN_COMMENTS: &str =
    "FROM reviews LEFT JOIN comments ON reviews.review_id = comments.review_id";

#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Query-string parameters of `GET /api/reviews`. Unknown keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReviewListQuery {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Column list, optionally qualified with `table.`.
fn column_list(table: Option<&str>, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| match table {
            Some(t) => format!("{}.{}", t, f),
            None => (*f).to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Empty query values count as absent.
fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Reviews joined with their comment count, filtered, grouped and ordered.
/// Checks category, then sort_by, then order; the first violation is returned.
pub fn select_reviews(query: &ReviewListQuery) -> Result<QueryBuf, AppError> {
    let category = present(&query.category);
    if let Some(c) = category {
        if !is_known_category(c) {
            return Err(AppError::InvalidCategoryQuery);
        }
    }
    let sort_by = present(&query.sort_by).map(str::parse::<SortColumn>).transpose()?;
    let order = present(&query.order).map(str::parse::<SortOrder>).transpose()?;

    // An explicit sort key without an order sorts ascending; the default key sorts newest first.
    let order = order.unwrap_or(if sort_by.is_some() {
        SortOrder::Asc
    } else {
        SortOrder::Desc
    });
    let sort_by = sort_by.unwrap_or(SortColumn::CreatedAt);

    let mut q = QueryBuf::new();
    let where_clause = match category {
        Some(c) => {
            let n = q.push_param(Value::String(c.to_string()));
            format!(" WHERE reviews.category = ${}", n)
        }
        None => String::new(),
    };
    q.sql = format!(
        "SELECT {}, {} {}{} GROUP BY reviews.review_id ORDER BY {} {}",
        column_list(Some("reviews"), REVIEW_SUMMARY_FIELDS),
        COMMENT_COUNT,
        REVIEWS_JOIN_COMMENTS,
        where_clause,
        sort_by.as_sql(),
        order.as_sql()
    );
    Ok(q)
}

/// One review with its comment count. Zero rows when the id is unknown.
pub fn select_review_by_id(review_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(review_id.into());
    q.sql = format!(
        "SELECT {}, {} {} WHERE reviews.review_id = ${} GROUP BY reviews.review_id",
        column_list(Some("reviews"), REVIEW_FIELDS),
        COMMENT_COUNT,
        REVIEWS_JOIN_COMMENTS,
        n
    );
    q
}

pub fn review_exists(review_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(review_id.into());
    q.sql = format!("SELECT review_id FROM reviews WHERE review_id = ${}", n);
    q
}

/// Single-statement increment; concurrent updates serialize in the datastore.
pub fn update_review_votes(review_id: i64, inc_votes: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let inc = q.push_param(inc_votes.into());
    let id = q.push_param(review_id.into());
    q.sql = format!(
        "UPDATE reviews SET votes = votes + ${} WHERE review_id = ${} RETURNING {}",
        inc,
        id,
        column_list(None, REVIEW_FIELDS)
    );
    q
}

/// Newest first.
pub fn select_comments_by_review(review_id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(review_id.into());
    q.sql = format!(
        "SELECT {} FROM comments WHERE review_id = ${} ORDER BY created_at DESC",
        column_list(None, COMMENT_FIELDS),
        n
    );
    q
}

pub fn insert_comment(review_id: i64, username: &str, body: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let body_n = q.push_param(Value::String(body.to_string()));
    let author_n = q.push_param(Value::String(username.to_string()));
    let review_n = q.push_param(review_id.into());
    q.sql = format!(
        "INSERT INTO comments (body, author, review_id, votes, created_at) \
         VALUES (${}, ${}, ${}, 0, NOW()) RETURNING {}",
        body_n,
        author_n,
        review_n,
        column_list(None, COMMENT_FIELDS)
    );
    q
}

pub fn select_categories() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT slug, description FROM categories".into();
    q
}

/// Readiness check.
pub fn ping() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT 1".into();
    q
}

pub fn select_users() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT username, name, avatar_url FROM users".into();
    q
}
