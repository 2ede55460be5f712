use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

mod common;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_api_test_liveness() {
    let (app, _store) = common::create_test_app().await;
    let (status, body) = get(app, "/api/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API is working");
}

#[tokio::test]
async fn test_lookup_is_case_normalized() {
    let (app, store) = common::create_test_app().await;
    common::seed(&store, &[("A", "Apple", "https://x/apple.png")]).await;

    let (status, body) = get(app.clone(), "/api/words/a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["letter"], "A");
    assert_eq!(body["word"], "Apple");
    assert_eq!(body["imageUrl"], "https://x/apple.png");
    assert!(body["_id"].is_string());

    let (status_upper, body_upper) = get(app, "/api/words/A").await;
    assert_eq!(status_upper, StatusCode::OK);
    assert_eq!(body_upper["word"], body["word"]);
}

#[tokio::test]
async fn test_unseeded_letter_is_not_found() {
    let (app, store) = common::create_test_app().await;
    common::seed(&store, &[("A", "Apple", "https://x/apple.png")]).await;

    let (status, body) = get(app, "/api/words/Z").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Word not found");
}

#[tokio::test]
async fn test_non_letter_segment_is_not_found() {
    let (app, _store) = common::create_test_app().await;

    let (status, body) = get(app, "/api/words/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Word not found");
}

#[tokio::test]
async fn test_find_first_with_duplicate_letters() {
    let (app, store) = common::create_test_app().await;
    common::seed(
        &store,
        &[
            ("B", "Ball", "https://x/ball.png"),
            ("B", "Bear", "https://x/bear.png"),
        ],
    )
    .await;

    // No uniqueness enforcement: any stored match is acceptable.
    let (status, body) = get(app, "/api/words/b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["letter"], "B");
    let word = body["word"].as_str().unwrap();
    assert!(word == "Ball" || word == "Bear");
}

#[tokio::test]
async fn test_reseed_replaces_the_collection() {
    let (app, store) = common::create_test_app().await;
    common::seed(&store, &[("A", "Apple", "https://x/apple.png")]).await;
    common::seed(&store, &[("A", "Ant", "https://x/ant.png")]).await;

    let (status, body) = get(app, "/api/words/A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "Ant");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (app, _store) = common::create_test_app().await;

    let (status, _body) = get(app, "/nonexistent/path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_store_degrades_without_crashing() {
    // The service starts even when the store cannot be opened; lookups
    // answer 500 and health reports the outage.
    let app = alphabet_backend::app(alphabet_backend::state::AppState::new(None));

    let (status, body) = get(app.clone(), "/api/words/a").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_health_reports_connected_store() {
    let (app, _store) = common::create_test_app().await;

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}
