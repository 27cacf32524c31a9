//! Credential codec: issuing and parsing signed access and refresh tokens.
//!
//! Tokens are HS256 JWTs signed with the configured secret. The codec owns
//! the keys and the per-kind lifetimes; it is built once at startup and
//! shared read-only.
//!
//! The current time is always passed in by the caller so that issuance and
//! expiry are deterministic for a given `now`. The library's own clock-based
//! `exp` check is disabled and replaced by [`Claims::is_expired_at`], which
//! treats the expiry instant itself as expired.
//!
//! # Example
//!
//! ```ignore
//! use authmock_auth::{Subject, TokenCodec, TokenKind};
//! use authmock_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let now = chrono::Utc::now();
//!
//! let credential = codec.issue(TokenKind::Access, Subject::new("test"), now)?;
//! let claims = codec.parse(&credential.token, TokenKind::Access, now)?;
//! assert_eq!(claims.sub, "test");
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use authmock_config::JwtConfig;

use crate::claims::{Claims, Subject, TokenKind};

/// Why a token could not be issued or accepted.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token expired at {expired_at}")]
    Expired { expired_at: i64 },

    #[error("expected a {expected} token, got a {found} token")]
    WrongKind { expected: TokenKind, found: TokenKind },

    #[error("failed to sign token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),

    #[error("lifetime of {lifetime}s overflows the expiry timestamp")]
    LifetimeOverflow { lifetime: i64 },
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::InvalidSignature,
            _ => Self::Malformed(err.to_string()),
        }
    }
}

/// A freshly signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub claims: Claims,
}

impl Credential {
    pub fn kind(&self) -> TokenKind {
        self.claims.kind
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    validation: Arc<Validation>,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl TokenCodec {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding: Arc::new(EncodingKey::from_secret(jwt_config.secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(jwt_config.secret.as_bytes())),
            validation: Arc::new(validation),
            access_token_expiry: jwt_config.access_token_expiry,
            refresh_token_expiry: jwt_config.refresh_token_expiry,
        }
    }

    /// Configured lifetime of `kind`, in seconds.
    pub fn lifetime(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_token_expiry,
            TokenKind::Refresh => self.refresh_token_expiry,
        }
    }

    /// Signs a new credential of `kind` for `subject`.
    ///
    /// # Arguments
    ///
    /// * `kind` - Access or refresh; selects the configured lifetime
    /// * `subject` - Identity attributes to embed in the claims
    /// * `now` - Issuance time, stored as `iat`
    ///
    /// # Returns
    ///
    /// The signed token together with its claims. `exp` is `iat` plus the
    /// lifetime of `kind`.
    ///
    /// # Errors
    ///
    /// * `LifetimeOverflow` - `iat + lifetime` does not fit in an `i64`
    /// * `Encoding` - the signing library failed
    ///
    /// # Example
    ///
    /// ```ignore
    /// let credential = codec.issue(TokenKind::Refresh, Subject::new("test"), Utc::now())?;
    /// assert_eq!(credential.kind(), TokenKind::Refresh);
    /// ```
    pub fn issue(
        &self,
        kind: TokenKind,
        subject: Subject,
        now: DateTime<Utc>,
    ) -> Result<Credential, TokenError> {
        let iat = now.timestamp();
        let lifetime = self.lifetime(kind).max(1);
        let exp = iat
            .checked_add(lifetime)
            .ok_or(TokenError::LifetimeOverflow { lifetime })?;

        let claims = Claims {
            sub: subject.identifier,
            name: subject.name,
            kind,
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Encoding)?;

        Ok(Credential { token, claims })
    }

    /// Verifies a token and returns its claims.
    ///
    /// Checks run in a fixed order: signature and structure, then expiry
    /// against `now`, then kind. An expired token of the wrong kind is
    /// therefore reported as expired.
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT
    /// * `expected` - The kind the caller accepts
    /// * `now` - Verification time; the token is expired when `now >= exp`
    ///
    /// # Errors
    ///
    /// * `Malformed` - not a JWT, missing claims, or `exp <= iat`
    /// * `InvalidSignature` - signed with another secret or algorithm
    /// * `Expired` - `now` is at or past `exp`
    /// * `WrongKind` - the `type` claim differs from `expected`
    ///
    /// # Example
    ///
    /// ```ignore
    /// let claims = codec.parse(&token, TokenKind::Access, Utc::now())?;
    /// println!("{}", claims.sub);
    /// ```
    pub fn parse(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)?.claims;

        if claims.exp <= claims.iat {
            return Err(TokenError::Malformed(
                "expiry does not follow issuance".to_string(),
            ));
        }

        if claims.is_expired_at(now.timestamp()) {
            return Err(TokenError::Expired {
                expired_at: claims.exp,
            });
        }

        if claims.kind != expected {
            return Err(TokenError::WrongKind {
                expected,
                found: claims.kind,
            });
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}
