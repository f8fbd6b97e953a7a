// End to end tests through the composed router.
//
// Each test starts from the seeded state and drives a sequence of requests,
// asserting on what later requests observe.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

#[fixture]
fn app() -> Router {
    router(AppState::seeded())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn created_posts_are_listed_sorted_and_searchable(app: Router) {
    let (status, created) = send(
        &app,
        with_json("POST", "/api/posts", json!({"title": "apple pie", "content": "Sweet."})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);

    let (_, listed) = send(&app, get("/api/posts?sort=title&direction=asc")).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["apple pie", "First post", "Second post"]);

    let (_, found) = send(&app, get("/api/posts/search?title=apple%20pie")).await;
    assert_eq!(found, json!(["apple pie"]));
}

#[rstest]
#[tokio::test]
async fn updates_are_visible_to_search(app: Router) {
    let (status, _) = send(
        &app,
        with_json("PUT", "/api/posts/2", json!({"content": "Rewritten."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, found) = send(&app, get("/api/posts/search?content=second")).await;
    assert_eq!(found, json!([]));

    let (_, found) = send(&app, get("/api/posts/search?title=Second%20post")).await;
    assert_eq!(found, json!(["Second post"]));
}

#[rstest]
#[tokio::test]
async fn deleted_posts_disappear_everywhere(app: Router) {
    let delete = || Request::delete("/api/posts/1").body(Body::empty()).unwrap();

    let (status, _) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, get("/api/posts")).await;
    assert_eq!(
        listed,
        json!([{"id": 2, "title": "Second post", "content": "This is the second post."}])
    );

    let (_, fallback) = send(&app, get("/api/posts/search")).await;
    assert_eq!(fallback["available_titles"], json!(["Second post"]));

    let (status, body) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Post not found"}));

    let (status, _) = send(
        &app,
        with_json("PUT", "/api/posts/1", json!({"title": "Back"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn search_is_not_shadowed_by_the_id_route(app: Router) {
    let (status, found) = send(&app, get("/api/posts/search?content=first")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!(["This is the first post."]));
}

#[rstest]
#[case("/api/posts/search?title=First%20post&title=x", json!(["First post"]))]
#[case(
    "/api/posts?sort=title&sort=content&direction=desc",
    json!([
        {"id": 2, "title": "Second post", "content": "This is the second post."},
        {"id": 1, "title": "First post", "content": "This is the first post."},
    ])
)]
#[tokio::test]
async fn repeated_query_keys_use_the_first_value(
    app: Router,
    #[case] uri: &str,
    #[case] expected: Value,
) {
    let response = app.oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, expected);
}

#[rstest]
#[tokio::test]
async fn cors_is_allowed_for_any_origin(app: Router) {
    let response = app
        .oneshot(
            Request::get("/api/posts")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[rstest]
#[tokio::test]
async fn cors_preflight_is_answered(app: Router) {
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/posts/1")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}
