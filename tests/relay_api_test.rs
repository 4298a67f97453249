use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use school_route_relay::api::router::router;
use school_route_relay::domain::model::OPTIMIZED_ORDER_PLACEHOLDER;
use school_route_relay::{OrsClient, RouteRelay};
use serde_json::{json, Value};
use tower::ServiceExt;

const API_KEY: &str = "test-ors-key";

fn six_points() -> Value {
    json!([
        [51.3890, 35.6892],
        [51.4012, 35.7001],
        [51.4120, 35.7105],
        [51.4231, 35.7150],
        [51.4305, 35.7222],
        [51.4410, 35.7310]
    ])
}

fn relay_router(endpoint: String) -> Router {
    let client = OrsClient::new(endpoint, API_KEY, None).unwrap();
    router(RouteRelay::new(client))
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/optimize-route")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_six_points_are_relayed_in_order() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/directions/driving-car/optimized")
            .header("authorization", API_KEY)
            .json_body(json!({ "coordinates": six_points() }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "routes": [{
                    "geometry": "kxmxEcxb|HuAcBo@aA",
                    "summary": {"duration": 1834.7, "distance": 14567.8}
                }]
            }));
    });

    let app = relay_router(server.url("/v2/directions/driving-car/optimized"));
    let (status, body) = post_json(app, json!({ "points": six_points() }).to_string()).await;

    upstream.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["route"], "kxmxEcxb|HuAcBo@aA");
    assert_eq!(body["summary"]["duration_text"], "31 دقیقه");
    assert_eq!(body["summary"]["distance_text"], "14.57 کیلومتر");
    assert_eq!(body["summary"]["optimized_order"], OPTIMIZED_ORDER_PLACEHOLDER);
}

#[tokio::test]
async fn test_wrong_point_count_is_rejected_before_upstream() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({"routes": []}));
    });

    let five = json!({ "points": [[51.0, 35.0], [51.1, 35.1], [51.2, 35.2], [51.3, 35.3], [51.4, 35.4]] });
    let seven = json!({ "points": [[1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0]] });

    for body in [five, seven, json!({ "points": [] }), json!({})] {
        let app = relay_router(server.url("/route"));
        let (status, response) = post_json(app, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["status"], "Error");
        assert_eq!(response["message"], "باید دقیقا ۶ نقطه ارسال شود.");
    }

    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let server = MockServer::start();
    let app = relay_router(server.url("/route"));
    let (status, response) = post_json(app, "not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["status"], "Error");

    let app = relay_router(server.url("/route"));
    let bad_pairs = json!({ "points": [[1.0], [2.0], [3.0], [4.0], [5.0], [6.0]] });
    let (status, response) = post_json(app, bad_pairs.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["status"], "Error");
}

#[tokio::test]
async fn test_upstream_http_error_is_server_error() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(POST).path("/route");
        then.status(500).body("internal routing failure");
    });

    let app = relay_router(server.url("/route"));
    let (status, response) = post_json(app, json!({ "points": six_points() }).to_string()).await;

    upstream.assert();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "Error");
    let message = response["message"].as_str().unwrap();
    assert!(message.starts_with("خطا در ارتباط با ORS: "));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = relay_router(format!("http://{}/route", addr));
    let (status, response) = post_json(app, json!({ "points": six_points() }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "Error");
    let message = response["message"].as_str().unwrap();
    assert!(message.starts_with("خطا در ارتباط با ORS: "));
    assert!(message.len() > "خطا در ارتباط با ORS: ".len());
}

#[tokio::test]
async fn test_upstream_without_routes_is_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/route");
        then.status(200).json_body(json!({"routes": []}));
    });

    let app = relay_router(server.url("/route"));
    let (status, response) = post_json(app, json!({ "points": six_points() }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["status"], "Error");
}

#[tokio::test]
async fn test_health_does_not_touch_upstream() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let app = relay_router(server.url("/route"));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "OK"}));
    assert_eq!(upstream.hits(), 0);
}
