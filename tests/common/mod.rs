use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use authmock::router::init_router;
use authmock::state::AppState;
use authmock_auth::{Identity, StaticIdentityProvider, Subject, TokenCodec, TokenKind};
use authmock_config::{CorsConfig, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const IDENTIFIER: &str = "test";
pub const PASSWORD: &str = "test";
pub const DISPLAY_NAME: &str = "Test User";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 300,
        refresh_token_expiry: 86_400,
    }
}

pub fn setup_test_app() -> Router {
    let identities = StaticIdentityProvider::new(Identity::new(IDENTIFIER, PASSWORD, DISPLAY_NAME));
    let state = AppState::new(&jwt_config(), Arc::new(identities), CorsConfig::default());
    init_router(state)
}

/// Codec sharing the app's signing secret, for minting tokens directly.
#[allow(dead_code)]
pub fn codec() -> TokenCodec {
    TokenCodec::new(&jwt_config())
}

/// A token of `kind` issued far enough in the past to have expired.
#[allow(dead_code)]
pub fn expired_token(kind: TokenKind) -> String {
    let issued_at = Utc::now() - Duration::days(3);
    codec()
        .issue(
            kind,
            Subject::new(IDENTIFIER).with_name(DISPLAY_NAME),
            issued_at,
        )
        .unwrap()
        .token
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_auth(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Logs in as the test identity and returns `(access_token, refresh_token)`.
#[allow(dead_code)]
pub async fn login(app: Router) -> (String, String) {
    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "secret": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    (
        body["data"]["accessToken"].as_str().unwrap().to_string(),
        body["data"]["refreshToken"].as_str().unwrap().to_string(),
    )
}
