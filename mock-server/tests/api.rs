use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, router, Fixture, MockApi, DEFAULT_API_KEY};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn trakt_request(uri: &str, api_key: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("trakt-api-version", "2")
        .header("trakt-api-key", api_key)
        .body(String::new())
        .unwrap()
}

// --- success ---

#[tokio::test]
async fn trending_returns_array() {
    let resp = app()
        .oneshot(trakt_request("/shows/trending.json", DEFAULT_API_KEY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let shows = body.as_array().unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0]["show"]["title"], "Breaking Bad");
}

#[tokio::test]
async fn summary_returns_object() {
    let resp = app()
        .oneshot(trakt_request("/shows/breaking-bad.json", DEFAULT_API_KEY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ids"]["slug"], "breaking-bad");
}

#[tokio::test]
async fn raw_fixture_is_served_verbatim() {
    let api = MockApi::new("k").with_fixture(
        "broken",
        Fixture::Raw {
            status: StatusCode::OK,
            body: b"mock body".to_vec(),
        },
    );
    let resp = router(api).oneshot(trakt_request("/broken.json", "k")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "mock body");
}

// --- errors ---

#[tokio::test]
async fn wrong_key_returns_401() {
    let resp = app()
        .oneshot(trakt_request("/shows/trending.json", "nope"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["error"], "invalid api key");
}

#[tokio::test]
async fn missing_version_returns_400() {
    let req = Request::builder()
        .uri("/shows/trending.json")
        .header("trakt-api-key", DEFAULT_API_KEY)
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn unknown_method_returns_404() {
    let resp = app()
        .oneshot(trakt_request("/foo/bar.json", DEFAULT_API_KEY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "unknown method foo/bar");
}

#[tokio::test]
async fn missing_extension_returns_404() {
    let resp = app()
        .oneshot(trakt_request("/shows/trending", DEFAULT_API_KEY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn maintenance_returns_503() {
    let api = MockApi::seeded("k").under_maintenance();
    let resp = router(api)
        .oneshot(trakt_request("/shows/trending.json", "k"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(resp).await,
        json!({"status": "failure", "error": "down for maintenance"})
    );
}

#[tokio::test]
async fn key_is_checked_before_maintenance() {
    let api = MockApi::seeded("k").under_maintenance();
    let resp = router(api)
        .oneshot(trakt_request("/shows/trending.json", "wrong"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
