mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use common::{DISPLAY_NAME, IDENTIFIER, PASSWORD, post_json, send, setup_test_app};

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();

    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "secret": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful.");
    assert!(body["data"]["accessToken"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["data"]["refreshToken"].as_str().is_some_and(|t| !t.is_empty()));
    assert_ne!(body["data"]["accessToken"], body["data"]["refreshToken"]);
    assert_eq!(body["data"]["identity"]["identifier"], IDENTIFIER);
    assert_eq!(body["data"]["identity"]["name"], DISPLAY_NAME);
    assert_eq!(body["data"]["expiresIn"], "5m");
}

#[tokio::test]
async fn test_login_accepts_legacy_field_names() {
    let app = setup_test_app();

    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            json!({ "email": IDENTIFIER, "password": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["identity"]["identifier"], IDENTIFIER);
}

#[tokio::test]
async fn test_login_wrong_secret() {
    let app = setup_test_app();

    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "secret": "wrong" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_login_unknown_identifier_is_indistinguishable() {
    let (unknown_status, unknown_body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            json!({ "identifier": "nobody", "secret": PASSWORD }),
        ),
    )
    .await;
    let (wrong_status, wrong_body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "secret": "wrong" }),
        ),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    for payload in [
        json!({}),
        json!({ "identifier": IDENTIFIER }),
        json!({ "secret": PASSWORD }),
        json!({ "identifier": "", "secret": PASSWORD }),
        json!({ "identifier": IDENTIFIER, "secret": "" }),
    ] {
        let (status, body) = send(setup_test_app(), post_json("/api/auth/login", payload.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "MISSING_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"identifier\": "))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CREDENTIALS");
}

#[tokio::test]
async fn test_login_without_content_type() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .body(Body::from(
            json!({ "identifier": IDENTIFIER, "secret": PASSWORD }).to_string(),
        ))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CREDENTIALS");
}

#[tokio::test]
async fn test_login_tokens_differ_in_kind() {
    use authmock_auth::TokenKind;
    use chrono::Utc;

    let (access, refresh) = common::login(setup_test_app()).await;
    let codec = common::codec();

    let access_claims = codec.parse(&access, TokenKind::Access, Utc::now()).unwrap();
    assert_eq!(access_claims.sub, IDENTIFIER);
    assert_eq!(access_claims.name.as_deref(), Some(DISPLAY_NAME));
    assert_eq!(access_claims.exp - access_claims.iat, 300);

    let refresh_claims = codec.parse(&refresh, TokenKind::Refresh, Utc::now()).unwrap();
    assert_eq!(refresh_claims.sub, IDENTIFIER);
    assert_eq!(refresh_claims.name, None);
    assert_eq!(refresh_claims.exp - refresh_claims.iat, 86_400);
}

#[tokio::test]
async fn test_login_non_string_secret_is_invalid_credentials() {
    for payload in [
        json!({ "identifier": IDENTIFIER, "secret": 123 }),
        json!({ "identifier": ["test"], "secret": PASSWORD }),
        json!({ "identifier": IDENTIFIER, "password": { "value": PASSWORD } }),
    ] {
        let (status, body) =
            send(setup_test_app(), post_json("/api/auth/login", payload.clone())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "payload {payload}");
        assert_eq!(body["code"], "INVALID_CREDENTIALS", "payload {payload}");
    }
}

#[tokio::test]
async fn test_login_null_field_is_missing() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "secret": null }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CREDENTIALS");
}

#[tokio::test]
async fn test_login_field_and_alias_together() {
    let (status, body) = send(
        setup_test_app(),
        post_json(
            "/api/auth/login",
            json!({ "identifier": IDENTIFIER, "email": IDENTIFIER, "secret": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["identity"]["identifier"], IDENTIFIER);
}
