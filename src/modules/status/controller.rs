use axum::Json;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use authmock_core::ApiResponse;

use super::model::{AuthProbeData, ENDPOINTS, HealthData, SERVER_NAME, ServiceIndex};
use crate::middleware::auth::AuthUser;

/// Service name, version and endpoint listing
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service index", body = ServiceIndex)),
    tag = "Status"
)]
pub async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        message: format!("{SERVER_NAME} credential service"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Unauthenticated health probe
#[utoipa::path(
    get,
    path = "/api/test",
    responses((status = 200, description = "Service is up", body = ApiResponse<HealthData>)),
    tag = "Status"
)]
pub async fn health() -> ApiResponse<HealthData> {
    ApiResponse::new(
        "Request succeeded.",
        HealthData {
            status: "OK",
            server: SERVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        },
    )
}

/// Health probe behind access token verification
#[utoipa::path(
    get,
    path = "/api/test/auth",
    responses(
        (status = 200, description = "Token accepted", body = ApiResponse<AuthProbeData>),
        (status = 401, description = "Token rejected", body = authmock_core::ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Status"
)]
pub async fn auth_probe(AuthUser(claims): AuthUser) -> ApiResponse<AuthProbeData> {
    ApiResponse::new(
        "Authenticated request succeeded.",
        AuthProbeData {
            kind: claims.kind,
            claims: claims.into(),
        },
    )
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "The requested endpoint was not found.",
            "path": uri.to_string(),
        })),
    )
}
