use axum::extract::State;
use axum::http::HeaderMap;
use chrono::Utc;
use tracing::instrument;

use authmock_auth::TokenKind;
use authmock_core::{ApiResponse, AuthError};

use super::model::{LoginData, LoginRequest, RefreshData, RefreshTokenRequest, VerifyData};
use super::service::AuthService;
use crate::extract::JsonBody;
use crate::metrics::{track_auth_failure, track_token_issued};
use crate::middleware::auth::authorization_header;
use crate::state::AppState;

/// Authenticate and receive an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginData>),
        (status = 400, description = "MISSING_CREDENTIALS", body = authmock_core::ErrorBody),
        (status = 401, description = "INVALID_CREDENTIALS", body = authmock_core::ErrorBody),
        (status = 500, description = "Internal server error", body = authmock_core::ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<LoginRequest>,
) -> Result<ApiResponse<LoginData>, AuthError> {
    let data = AuthService::login(&state.codec, state.identities.as_ref(), dto, Utc::now())
        .inspect_err(track_auth_failure)?;

    track_token_issued(TokenKind::Access);
    track_token_issued(TokenKind::Refresh);

    Ok(ApiResponse::new("Login successful.", data))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Access token reissued", body = ApiResponse<RefreshData>),
        (status = 400, description = "MISSING_REFRESH_TOKEN", body = authmock_core::ErrorBody),
        (status = 401, description = "INVALID_REFRESH_TOKEN, REFRESH_TOKEN_EXPIRED or INVALID_TOKEN_TYPE", body = authmock_core::ErrorBody),
        (status = 500, description = "Internal server error", body = authmock_core::ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<RefreshTokenRequest>,
) -> Result<ApiResponse<RefreshData>, AuthError> {
    let data = AuthService::refresh(&state.codec, state.identities.as_ref(), dto, Utc::now())
        .inspect_err(track_auth_failure)?;

    track_token_issued(TokenKind::Access);

    Ok(ApiResponse::new("Token refreshed successfully.", data))
}

/// Verify the access token in the `Authorization` header
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<VerifyData>),
        (status = 401, description = "MISSING_TOKEN, INVALID_TOKEN_FORMAT, INVALID_TOKEN, TOKEN_EXPIRED or INVALID_TOKEN_TYPE", body = authmock_core::ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiResponse<VerifyData>, AuthError> {
    let data = authorization_header(&headers)
        .and_then(|header| AuthService::verify(&state.codec, header, Utc::now()))
        .inspect_err(track_auth_failure)?;

    Ok(ApiResponse::new("Token is valid.", data))
}
