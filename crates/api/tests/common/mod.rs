// Shared helpers for the HTTP integration tests. Each test binary pulls in
// its own copy, so not every helper is used everywhere.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wall_api::config::ServerConfig;
use wall_api::router::build_app_router;
use wall_api::state::AppState;
use wall_db::models::project::{CreateProject, Project};
use wall_db::repositories::project_repo::ProjectRepo;

/// Bearer token the test config hands to the admin surface.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Multipart boundary used by [`put_multipart_auth`].
const MULTIPART_BOUNDARY: &str = "wall-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Media uploads land in a per-user temp directory; file names are UUIDs,
/// so parallel tests never collide.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: std::env::temp_dir().join("wall-test-media"),
        media_url: "/media/".to_string(),
        static_root: std::env::temp_dir().join("wall-test-static"),
        static_url: "/static/".to_string(),
        site_title: "Project Wall".to_string(),
        admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Tests exercise the same router construction as `main.rs`, so the whole
/// middleware stack (CORS, request ID, timeout, tracing, compression,
/// panic recovery) is in the loop.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`], but with a caller-supplied config. Used by
/// tests that need a variation (admin surface disabled, different media
/// prefix).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a project directly through the repository, bypassing the admin
/// API. Handy for seeding the public pages.
pub async fn create_project(pool: &PgPool, title: &str, priority: i32) -> Project {
    let input = CreateProject {
        title: title.to_string(),
        slug: None,
        description: format!("{title} description"),
        accent_color: None,
        priority: Some(priority),
    };
    ProjectRepo::create(pool, &input)
        .await
        .expect("failed to seed project")
}

// ---------------------------------------------------------------------------
// Request helpers. Each consumes the router (oneshot), so callers rebuild
// the app between requests with `build_test_app(pool.clone())`.
// ---------------------------------------------------------------------------

/// Send a GET request to the given URI.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with an explicit `User-Agent` header.
pub async fn get_with_user_agent(app: Router, uri: &str, user_agent: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(USER_AGENT, user_agent)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and no auth header.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request carrying a single multipart file field and a bearer
/// token. Used for cover uploads.
pub async fn put_multipart_auth(
    app: Router,
    uri: &str,
    field_name: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
    token: &str,
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
