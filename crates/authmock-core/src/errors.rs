//! Authentication error taxonomy.
//!
//! Every failure the service can report is one variant of [`AuthError`].
//! Each variant carries a fixed HTTP status, a stable machine-readable code
//! and a human-readable message. The code is the contract clients program
//! against; the status and message may change.
//!
//! [`AuthError::Internal`] is the only variant without a code. It wraps an
//! unexpected fault (signing library, serialization) which is logged and
//! rendered as a generic 500.

use std::sync::OnceLock;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

static EXPOSE_INTERNAL_ERRORS: OnceLock<bool> = OnceLock::new();

/// Allow internal fault detail in 500 bodies. Call once at startup, only
/// outside production. Later calls are ignored.
pub fn set_expose_internal_errors(expose: bool) {
    let _ = EXPOSE_INTERNAL_ERRORS.set(expose);
}

fn expose_internal_errors() -> bool {
    EXPOSE_INTERNAL_ERRORS.get().copied().unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Identifier and secret are required.")]
    MissingCredentials,

    #[error("Identifier or secret is incorrect.")]
    InvalidCredentials,

    #[error("A refresh token is required.")]
    MissingRefreshToken,

    #[error("Invalid refresh token.")]
    InvalidRefreshToken,

    #[error("Refresh token has expired. Please log in again.")]
    RefreshTokenExpired,

    #[error("An authentication token is required.")]
    MissingToken,

    #[error("Malformed authentication token. Expected 'Bearer <token>'.")]
    InvalidTokenFormat,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Token has expired.")]
    TokenExpired,

    #[error("Invalid token type.")]
    InvalidTokenType,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    /// Stable machine-readable code. `None` for internal faults.
    pub fn code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingRefreshToken => "MISSING_REFRESH_TOKEN",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::RefreshTokenExpired => "REFRESH_TOKEN_EXPIRED",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidTokenType => "INVALID_TOKEN_TYPE",
            Self::Internal(_) => return None,
        };
        Some(code)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::MissingRefreshToken => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Builds the response body. Internal detail is attached only when
    /// `expose_detail` is set.
    pub fn body(&self, expose_detail: bool) -> ErrorBody {
        match self {
            Self::Internal(err) => ErrorBody {
                success: false,
                message: "An internal server error occurred.".to_string(),
                code: None,
                error: expose_detail.then(|| format!("{err:#}")),
            },
            other => ErrorBody {
                success: false,
                message: other.to_string(),
                code: other.code().map(str::to_string),
                error: None,
            },
        }
    }
}

/// Failure envelope shared by every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "INVALID_TOKEN")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            tracing::error!(error = ?err, "Internal error while handling request");
        }

        let body = self.body(expose_internal_errors());
        (self.status(), Json(body)).into_response()
    }
}
