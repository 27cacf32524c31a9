use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use validator::Validate;

use authmock_auth::{Claims, IdentityProvider, Subject, TokenCodec, TokenError, TokenKind};
use authmock_config::format_duration;
use authmock_core::AuthError;

use super::model::{
    IdentityInfo, LoginData, LoginRequest, RefreshData, RefreshTokenRequest, TextField,
    VerifyData,
};

/// Login, refresh and verify.
///
/// Every operation is a pure function of its input, the codec, the identity
/// provider and `now`. Nothing is stored between calls: refresh tokens stay
/// valid and reusable until they expire.
pub struct AuthService;

impl AuthService {
    /// Authenticates an identifier/secret pair and issues a token pair.
    ///
    /// # Arguments
    ///
    /// * `codec` - Signs the access and refresh tokens
    /// * `identities` - Resolves the identifier to a known identity
    /// * `dto` - The login request body
    /// * `now` - Issuance time of both tokens
    ///
    /// # Returns
    ///
    /// Both tokens, the identity's public attributes and the access lifetime
    /// in compact form (`"5m"`).
    ///
    /// # Errors
    ///
    /// * `MissingCredentials` - a field is absent, null or an empty string
    /// * `InvalidCredentials` - unknown identifier, wrong secret, or a field
    ///   that is not a string
    /// * `Internal` - the signing library failed
    ///
    /// # Example
    ///
    /// ```ignore
    /// let data = AuthService::login(&codec, &provider, LoginRequest::new("test", "test"), Utc::now())?;
    /// println!("{}", data.access_token);
    /// ```
    #[instrument(skip_all, fields(identifier = dto.identifier.as_ref().and_then(TextField::as_text)))]
    pub fn login(
        codec: &TokenCodec,
        identities: &dyn IdentityProvider,
        dto: LoginRequest,
        now: DateTime<Utc>,
    ) -> Result<LoginData, AuthError> {
        dto.validate().map_err(|_| AuthError::MissingCredentials)?;
        let identifier = dto.identifier.as_ref().and_then(TextField::as_text);
        let secret = dto.secret.as_ref().and_then(TextField::as_text);
        let (Some(identifier), Some(secret)) = (identifier, secret) else {
            return Err(AuthError::InvalidCredentials);
        };

        let identity = identities
            .find_by_identifier(identifier)
            .filter(|identity| identity.verify_secret(secret))
            .ok_or(AuthError::InvalidCredentials)?;

        let access = codec
            .issue(TokenKind::Access, identity.access_subject(), now)
            .map_err(AuthError::internal)?;
        let refresh = codec
            .issue(TokenKind::Refresh, identity.refresh_subject(), now)
            .map_err(AuthError::internal)?;

        debug!(access_exp = access.expires_at(), refresh_exp = refresh.expires_at(), "Issued token pair");

        Ok(LoginData {
            access_token: access.token,
            refresh_token: refresh.token,
            identity: IdentityInfo {
                identifier: identity.identifier,
                name: identity.display_name,
            },
            expires_in: format_duration(codec.lifetime(TokenKind::Access)),
        })
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// The refresh token is not consumed and stays valid until it expires.
    /// The display name in the new access token is looked up through
    /// `identities`, since refresh tokens carry only the identifier.
    ///
    /// # Errors
    ///
    /// * `MissingRefreshToken` - the field is absent, null or empty
    /// * `RefreshTokenExpired` - the token expired at or before `now`
    /// * `InvalidTokenType` - an access token was sent
    /// * `InvalidRefreshToken` - bad signature, malformed token, or a value
    ///   that is not a string
    ///
    /// # Example
    ///
    /// ```ignore
    /// let data = AuthService::refresh(&codec, &provider, RefreshTokenRequest::new(token), Utc::now())?;
    /// ```
    #[instrument(skip_all)]
    pub fn refresh(
        codec: &TokenCodec,
        identities: &dyn IdentityProvider,
        dto: RefreshTokenRequest,
        now: DateTime<Utc>,
    ) -> Result<RefreshData, AuthError> {
        dto.validate().map_err(|_| AuthError::MissingRefreshToken)?;
        let Some(refresh_token) = dto.refresh_token.as_ref().and_then(TextField::as_text) else {
            return Err(AuthError::InvalidRefreshToken);
        };

        let claims = codec
            .parse(refresh_token, TokenKind::Refresh, now)
            .map_err(refresh_failure)?;

        let name = identities
            .find_by_identifier(&claims.sub)
            .map(|identity| identity.display_name);
        let subject = Subject {
            identifier: claims.sub,
            name,
        };

        let access = codec
            .issue(TokenKind::Access, subject, now)
            .map_err(AuthError::internal)?;

        debug!(identifier = %access.claims.sub, "Issued access token from refresh token");

        Ok(RefreshData {
            access_token: access.token,
            expires_in: format_duration(codec.lifetime(TokenKind::Access)),
        })
    }

    /// Verifies the access token in an `Authorization` header value.
    ///
    /// # Arguments
    ///
    /// * `authorization` - The raw header value, `None` when absent
    ///
    /// # Returns
    ///
    /// The decoded claims, the token kind and the configured access lifetime.
    ///
    /// # Errors
    ///
    /// See [`AuthService::authenticate`].
    #[instrument(skip_all)]
    pub fn verify(
        codec: &TokenCodec,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<VerifyData, AuthError> {
        let claims = Self::authenticate(codec, authorization, now)?;

        Ok(VerifyData {
            kind: claims.kind,
            claims: claims.into(),
            expires_in: format_duration(codec.lifetime(TokenKind::Access)),
        })
    }

    /// Resolves an `Authorization` header value to the claims of a valid
    /// access token.
    ///
    /// # Errors
    ///
    /// * `MissingToken` / `InvalidTokenFormat` - see [`extract_bearer_token`]
    /// * `TokenExpired` - the token expired at or before `now`
    /// * `InvalidTokenType` - a refresh token was sent
    /// * `InvalidToken` - bad signature or malformed token
    pub fn authenticate(
        codec: &TokenCodec,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Claims, AuthError> {
        let token = extract_bearer_token(authorization)?;
        codec
            .parse(token, TokenKind::Access, now)
            .map_err(access_failure)
    }
}

/// Splits `Bearer <token>`.
///
/// The scheme is matched case-insensitively and must be followed by exactly
/// one space and a token without whitespace.
///
/// # Errors
///
/// * `MissingToken` - the header is absent or blank
/// * `InvalidTokenFormat` - another scheme, no token, or extra whitespace
///   around the token
///
/// # Example
///
/// ```ignore
/// assert_eq!(extract_bearer_token(Some("Bearer abc"))?, "abc");
/// assert!(extract_bearer_token(Some("Bearer  abc")).is_err());
/// ```
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AuthError::InvalidTokenFormat)?;

    if !scheme.eq_ignore_ascii_case("bearer")
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return Err(AuthError::InvalidTokenFormat);
    }

    Ok(token)
}

fn refresh_failure(err: TokenError) -> AuthError {
    match err {
        TokenError::Expired { .. } => AuthError::RefreshTokenExpired,
        TokenError::WrongKind { .. } => AuthError::InvalidTokenType,
        TokenError::Encoding(_) | TokenError::LifetimeOverflow { .. } => AuthError::internal(err),
        TokenError::Malformed(_) | TokenError::InvalidSignature => AuthError::InvalidRefreshToken,
    }
}

fn access_failure(err: TokenError) -> AuthError {
    match err {
        TokenError::Expired { .. } => AuthError::TokenExpired,
        TokenError::WrongKind { .. } => AuthError::InvalidTokenType,
        TokenError::Encoding(_) | TokenError::LifetimeOverflow { .. } => AuthError::internal(err),
        TokenError::Malformed(_) | TokenError::InvalidSignature => AuthError::InvalidToken,
    }
}
