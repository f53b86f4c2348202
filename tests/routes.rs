//! Route tests driving the full router with `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use userdesk::{
    app::build_app, config::AppConfig, state::AppState, HttpBackend, InMemoryBackend,
};

fn memory_app() -> Router {
    build_app(AppState::fake())
}

fn down_app() -> (Router, String) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);

    let config = AppConfig {
        backend_url: url.clone(),
        ..AppConfig::default()
    };
    let state = AppState::from_parts(
        Arc::new(config),
        Arc::new(HttpBackend::new(&url).unwrap()),
    );
    (build_app(state), url)
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

mod overview_page {
    use super::*;

    #[tokio::test]
    async fn renders_backend_users() {
        let (status, html) = send(memory_app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("John Doe"));
        assert!(html.contains("Jane Smith"));
        assert!(html.contains(r#"data-total-count="2""#));
        assert!(!html.contains("error-banner"));
    }

    #[tokio::test]
    async fn unreachable_backend_still_200_with_banner() {
        let (app, url) = down_app();
        let (status, html) = send(app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("error-banner"));
        assert!(html.contains(&AppConfig { backend_url: url, ..AppConfig::default() }.unavailable_message()));
        assert!(html.contains(r#"data-total-count="0""#));
        assert!(!html.contains("user-card"));
    }
}

mod api {
    use super::*;

    #[tokio::test]
    async fn list_with_defaults() {
        let (status, body) = send(memory_app(), get("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["total_count"], 2);
        assert_eq!(v["users"][0]["name"], "John Doe");
    }

    #[tokio::test]
    async fn list_rejects_bad_pagination() {
        let (status, _) = send(memory_app(), get("/api/users?page=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(memory_app(), get("/api/users?page=1&page_size=150")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_found_missing_and_invalid() {
        let (status, body) = send(memory_app(), get("/api/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("john@example.com"));

        let (status, _) = send(memory_app(), get("/api/users/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(memory_app(), get("/api/users/0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let app = memory_app();
        let (status, body) = send(
            app.clone(),
            post_json("/api/users", json!({"name": "Alice", "email": "alice@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(created["id"], 3);
        assert_eq!(created["created_at"], created["updated_at"]);

        let (status, body) = send(app, get("/api/users/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Alice"));
    }

    #[tokio::test]
    async fn create_validation_and_conflict() {
        let app = memory_app();
        let (status, _) = send(
            app.clone(),
            post_json("/api/users", json!({"name": "", "email": "x@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            app.clone(),
            post_json("/api/users", json!({"name": "X", "email": "not-an-email"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            app,
            post_json("/api/users", json!({"name": "John", "email": "john@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        let (app, _) = down_app();
        let (status, _) = send(app, get("/api/users")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn health_reports_backend_state() {
        let (status, body) = send(memory_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"total_count\":2"));

        let (app, _) = down_app();
        let (status, _) = send(app, get("/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn memory_backend_can_be_seeded() {
        let state = AppState::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(InMemoryBackend::with_users(vec![])),
        );
        let (status, html) = send(build_app(state), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("empty-state"));
    }
}
