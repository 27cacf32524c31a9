mod common;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use authmock_auth::TokenKind;
use common::{DISPLAY_NAME, IDENTIFIER, expired_token, get_with_auth, login, post_json, send, setup_test_app};

#[tokio::test]
async fn test_refresh_success() {
    let (_, refresh_token) = login(setup_test_app()).await;

    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refreshToken": refresh_token })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Token refreshed successfully.");
    assert_eq!(body["data"]["expiresIn"], "5m");

    let access_token = body["data"]["accessToken"].as_str().unwrap();
    let claims = common::codec()
        .parse(access_token, TokenKind::Access, Utc::now())
        .unwrap();
    assert_eq!(claims.sub, IDENTIFIER);
    assert_eq!(claims.name.as_deref(), Some(DISPLAY_NAME));
}

#[tokio::test]
async fn test_refreshed_access_token_verifies() {
    let (_, refresh_token) = login(setup_test_app()).await;

    let (_, body) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refreshToken": refresh_token })),
    )
    .await;
    let access_token = body["data"]["accessToken"].as_str().unwrap();

    let (status, body) = send(
        setup_test_app(),
        get_with_auth("/api/auth/verify", Some(&format!("Bearer {access_token}"))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["claims"]["identifier"], IDENTIFIER);
}

#[tokio::test]
async fn test_refresh_accepts_snake_case_field() {
    let (_, refresh_token) = login(setup_test_app()).await;

    let (status, _) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refresh_token": refresh_token })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_token_is_reusable() {
    let (_, refresh_token) = login(setup_test_app()).await;
    let app = setup_test_app();

    for _ in 0..2 {
        let (status, _) = send(
            app.clone(),
            post_json("/api/auth/refresh", json!({ "refreshToken": refresh_token })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_refresh_missing_token() {
    for payload in [json!({}), json!({ "refreshToken": "" })] {
        let (status, body) = send(setup_test_app(), post_json("/api/auth/refresh", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "MISSING_REFRESH_TOKEN");
    }
}

#[tokio::test]
async fn test_refresh_with_access_token_is_rejected() {
    let (access_token, _) = login(setup_test_app()).await;

    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refreshToken": access_token })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_TOKEN_TYPE");
}

#[tokio::test]
async fn test_refresh_expired_token() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/refresh",
            json!({ "refreshToken": expired_token(TokenKind::Refresh) }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "REFRESH_TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_refresh_garbage_token() {
    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refreshToken": "not.a.token" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn test_refresh_token_signed_with_other_secret() {
    let now = Utc::now().timestamp();
    let forged = encode(
        &Header::default(),
        &json!({ "sub": IDENTIFIER, "type": "refresh", "iat": now, "exp": now + 3600 }),
        &EncodingKey::from_secret(b"some-other-secret-entirely-different"),
    )
    .unwrap();

    let (status, body) = send(
        setup_test_app(),
        post_json("/api/auth/refresh", json!({ "refreshToken": forged })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn test_refresh_non_string_token_is_invalid() {
    for payload in [json!({ "refreshToken": 123 }), json!({ "refreshToken": true })] {
        let (status, body) =
            send(setup_test_app(), post_json("/api/auth/refresh", payload.clone())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "payload {payload}");
        assert_eq!(body["code"], "INVALID_REFRESH_TOKEN", "payload {payload}");
    }
}
