use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_app_state());
    let resp = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let app = api_routes(test_app_state());
    let resp = app
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
