use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use bscribe::infrastructure::observability::{REQUEST_ID_HEADER, request_id_middleware};

fn router() -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(middleware::from_fn(request_id_middleware))
}

async fn response_request_id(request: Request<Body>) -> String {
    let response = router().oneshot(request).await.unwrap();
    response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generates_uuid() {
    let id = response_request_id(Request::builder().uri("/ping").body(Body::empty()).unwrap()).await;

    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[tokio::test]
async fn given_empty_request_id_when_handled_then_generates_uuid() {
    let request = Request::builder()
        .uri("/ping")
        .header(REQUEST_ID_HEADER, "")
        .body(Body::empty())
        .unwrap();

    let id = response_request_id(request).await;

    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[tokio::test]
async fn given_two_requests_without_id_when_handled_then_ids_differ() {
    let first = response_request_id(Request::builder().uri("/ping").body(Body::empty()).unwrap()).await;
    let second = response_request_id(Request::builder().uri("/ping").body(Body::empty()).unwrap()).await;

    assert_ne!(first, second);
}
