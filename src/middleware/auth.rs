use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use chrono::Utc;

use authmock_auth::Claims;
use authmock_core::AuthError;

use crate::metrics::track_auth_failure;
use crate::modules::auth::AuthService;
use crate::state::AppState;

/// Raw `Authorization` header value. A value that is not visible ASCII is
/// reported as a format error rather than a missing header.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::InvalidTokenFormat))
        .transpose()
}

/// Extractor that admits only requests carrying a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn identifier(&self) -> &str {
        &self.0.sub
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = authorization_header(&parts.headers)?;
        let claims = AuthService::authenticate(&state.codec, header, Utc::now())
            .inspect_err(track_auth_failure)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_authorization_header_missing() {
        let headers = HeaderMap::new();
        assert!(matches!(authorization_header(&headers), Ok(None)));
    }

    #[test]
    fn test_authorization_header_present() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(authorization_header(&headers).unwrap(), Some("Bearer abc"));
    }

    #[test]
    fn test_authorization_header_not_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert!(matches!(
            authorization_header(&headers),
            Err(AuthError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn test_auth_user_accessors() {
        let user = AuthUser(Claims {
            sub: "test".to_string(),
            name: Some("Test User".to_string()),
            kind: authmock_auth::TokenKind::Access,
            iat: 1,
            exp: 2,
        });
        assert_eq!(user.identifier(), "test");
        assert_eq!(user.name(), Some("Test User"));
    }
}
