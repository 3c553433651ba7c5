mod common;

use axum::http::StatusCode;
use boardgame_reviews::sql::KNOWN_CATEGORIES;
use common::{review_row, review_summary, router, send, Reply, ScriptedExecutor};
use serde_json::json;

#[tokio::test]
async fn lists_reviews_with_string_comment_count() {
    let db = ScriptedExecutor::new(vec![Reply::Rows(vec![
        review_summary(2, "dexterity", 5, 3),
        review_summary(1, "euro game", 1, 0),
    ])]);
    let (status, body) = send(router(&db), "GET", "/api/reviews", None).await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["comment_count"], json!("3"));
    assert_eq!(reviews[1]["comment_count"], json!("0"));
    assert!(reviews[0].get("review_body").is_none());

    let q = &db.seen()[0];
    assert!(q.sql.ends_with("ORDER BY reviews.created_at DESC"));
    assert!(q.params.is_empty());
}

#[tokio::test]
async fn category_filter_binds_every_known_slug() {
    for slug in KNOWN_CATEGORIES {
        let db = ScriptedExecutor::new(vec![Reply::Rows(vec![review_summary(1, slug, 0, 0)])]);
        let encoded = slug.replace(' ', "%20").replace('\'', "%27");
        let uri = format!("/api/reviews?category={}", encoded);
        let (status, body) = send(router(&db), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "{slug}");
        assert_eq!(body["reviews"][0]["category"], json!(slug));
        assert_eq!(db.seen()[0].params, vec![json!(slug)]);
    }
}

#[tokio::test]
async fn invalid_listing_parameters_never_reach_the_datastore() {
    let cases = [
        ("/api/reviews?category=bananas", "invalid category query"),
        (
            "/api/reviews?category=dexterity%27%3B%20DROP%20TABLE%20reviews%3B--",
            "invalid category query",
        ),
        ("/api/reviews?sort_by=review_body", "invalid sort query"),
        ("/api/reviews?sort_by=votes&order=asc", "invalid order query"),
        ("/api/reviews?order=sideways", "invalid order query"),
    ];
    for (uri, msg) in cases {
        let db = ScriptedExecutor::new(vec![]);
        let (status, body) = send(router(&db), "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "msg": msg }));
        assert!(db.seen().is_empty());
    }
}

#[tokio::test]
async fn sort_and_order_reach_the_statement() {
    let db = ScriptedExecutor::new(vec![
        Reply::Rows(vec![]),
        Reply::Rows(vec![]),
        Reply::Rows(vec![]),
    ]);
    send(router(&db), "GET", "/api/reviews?sort_by=title", None).await;
    send(router(&db), "GET", "/api/reviews?sort_by=comment_count&order=DESC", None).await;
    send(router(&db), "GET", "/api/reviews?order=ASC", None).await;

    let seen = db.seen();
    assert!(seen[0].sql.ends_with("ORDER BY reviews.title ASC"));
    assert!(seen[1].sql.ends_with("ORDER BY comment_count DESC"));
    assert!(seen[2].sql.ends_with("ORDER BY reviews.created_at ASC"));
}

#[tokio::test]
async fn reads_one_review() {
    let mut row = review_row(2, 5);
    row["comment_count"] = json!(3);
    let db = ScriptedExecutor::new(vec![Reply::Rows(vec![row])]);
    let (status, body) = send(router(&db), "GET", "/api/reviews/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["review_id"], 2);
    assert_eq!(body["review"]["review_body"], "Farmyard fun!");
    assert_eq!(body["review"]["comment_count"], "3");
    assert_eq!(db.seen()[0].params, vec![json!(2)]);
}

#[tokio::test]
async fn review_lookup_errors() {
    let db = ScriptedExecutor::new(vec![]);
    let (status, body) = send(router(&db), "GET", "/api/reviews/banana", None).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, json!({ "msg": "Invalid Id" })));
    assert!(db.seen().is_empty());

    let db = ScriptedExecutor::new(vec![Reply::Rows(vec![])]);
    let (status, body) = send(router(&db), "GET", "/api/reviews/9999", None).await;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, json!({ "msg": "review does not exist" })));
}

#[tokio::test]
async fn patch_increments_votes() {
    let db = ScriptedExecutor::new(vec![Reply::Rows(vec![review_row(1, 2)])]);
    let inc = Some(r#"{"inc_votes": 1}"#);
    let (status, body) = send(router(&db), "PATCH", "/api/reviews/1", inc).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["votes"], 2);
    assert_eq!(body["review"]["review_id"], 1);

    let q = &db.seen()[0];
    assert!(q.sql.starts_with("UPDATE reviews SET votes = votes + $1 WHERE review_id = $2"));
    assert_eq!(q.params, vec![json!(1), json!(1)]);
}

#[tokio::test]
async fn patch_rejects_bad_bodies_before_querying() {
    let bodies = [
        r#"{"inc_votes": "test"}"#,
        r#"{}"#,
        r#"{"inc_votes": 0}"#,
        r#"{"inc_votes": 2147483648}"#,
        r#"{"inc_votes": -2147483649}"#,
        "not json",
    ];
    for body in bodies {
        let db = ScriptedExecutor::new(vec![]);
        let (status, resp) = send(router(&db), "PATCH", "/api/reviews/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp, json!({ "msg": "Bad Request" }));
        assert!(db.seen().is_empty());
    }
}

#[tokio::test]
async fn patch_unknown_review_is_404() {
    let db = ScriptedExecutor::new(vec![Reply::Rows(vec![])]);
    let dec = Some(r#"{"inc_votes": -4}"#);
    let (status, body) = send(router(&db), "PATCH", "/api/reviews/9999", dec).await;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, json!({ "msg": "review does not exist" })));

    let db = ScriptedExecutor::new(vec![]);
    let inc = Some(r#"{"inc_votes": 1}"#);
    let (status, body) = send(router(&db), "PATCH", "/api/reviews/one", inc).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, json!({ "msg": "Invalid Id" })));
}
