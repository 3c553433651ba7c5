//! Scripted executor and request helpers shared by router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use boardgame_reviews::sql::QueryBuf;
use boardgame_reviews::{app, AppError, AppState, Executor};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub enum Reply {
    Rows(Vec<Value>),
    /// Datastore failure with this SQLSTATE.
    Fail(&'static str),
    /// Constraint violation: SQLSTATE and constraint name.
    Violation(&'static str, &'static str),
}

/// Answers queries from a fixed script, in order, and records what it was asked.
#[derive(Default)]
pub struct ScriptedExecutor {
    replies: Mutex<VecDeque<Reply>>,
    seen: Mutex<Vec<QueryBuf>>,
}

impl ScriptedExecutor {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(ScriptedExecutor {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn seen(&self) -> Vec<QueryBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for ScriptedExecutor {
    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        self.seen.lock().unwrap().push(q.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Rows(rows)) => Ok(rows),
            Some(Reply::Fail(code)) => Err(AppError::Datastore {
                code: Some(code.into()),
                constraint: None,
                message: format!("scripted failure {}", code),
            }),
            Some(Reply::Violation(code, constraint)) => Err(AppError::Datastore {
                code: Some(code.into()),
                constraint: Some(constraint.into()),
                message: format!("scripted violation of {}", constraint),
            }),
            None => Err(AppError::Datastore {
                code: None,
                constraint: None,
                message: format!("unscripted query: {}", q.sql),
            }),
        }
    }
}

pub fn router(db: &Arc<ScriptedExecutor>) -> Router {
    app(AppState { db: db.clone() })
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    send_request(app, request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

const IMG_URL: &str =
    "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg";

pub fn review_summary(review_id: i64, category: &str, votes: i64, comment_count: i64) -> Value {
    json!({
        "owner": "mallionaire",
        "title": format!("Review {}", review_id),
        "review_id": review_id,
        "category": category,
        "review_img_url": IMG_URL,
        "created_at": "2021-01-18T10:00:20.514Z",
        "votes": votes,
        "designer": "Uwe Rosenberg",
        "comment_count": comment_count,
    })
}

pub fn review_row(review_id: i64, votes: i64) -> Value {
    json!({
        "review_id": review_id,
        "title": "Agricola",
        "review_body": "Farmyard fun!",
        "designer": "Uwe Rosenberg",
        "review_img_url": IMG_URL,
        "owner": "mallionaire",
        "category": "euro game",
        "votes": votes,
        "created_at": "2021-01-18T10:00:20.514Z",
    })
}

pub fn comment_row(comment_id: i64, review_id: i64, author: &str, body: &str) -> Value {
    json!({
        "comment_id": comment_id,
        "body": body,
        "author": author,
        "review_id": review_id,
        "votes": 0,
        "created_at": "2021-01-18T10:09:05.410Z",
    })
}
