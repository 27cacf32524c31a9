use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use authmock_auth::{Claims, TokenKind};

/// A request field as sent by the client.
///
/// `null` counts as absent. Any other non-string JSON value is kept as
/// [`TextField::Other`]: it is present, but can never match a credential.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub enum TextField {
    Text(String),
    Other,
}

impl TextField {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other => None,
        }
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text)),
            _ => Some(Self::Other),
        }
    }
}

impl From<&str> for TextField {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TextField {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(_) => f.write_str("Text(<redacted>)"),
            Self::Other => f.write_str("Other"),
        }
    }
}

fn not_blank(value: &TextField) -> Result<(), ValidationError> {
    match value {
        TextField::Text(text) if text.is_empty() => Err(ValidationError::new("blank")),
        _ => Ok(()),
    }
}

/// Takes the first non-null value among `keys`.
fn take_field(body: &mut Map<String, Value>, keys: &[&str]) -> Option<TextField> {
    keys.iter()
        .find_map(|key| body.remove(*key).and_then(TextField::from_json))
}

/// Login request.
///
/// `email` and `id` are accepted for `identifier`, and `password` for
/// `secret`, to match the field names older clients send. When several
/// spellings are sent, the first non-null one in that order wins.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct LoginRequest {
    #[validate(required, custom(function = "not_blank"))]
    #[schema(value_type = Option<String>, example = "test")]
    pub identifier: Option<TextField>,
    #[validate(required, custom(function = "not_blank"))]
    #[schema(value_type = Option<String>, example = "test")]
    pub secret: Option<TextField>,
}

impl LoginRequest {
    pub fn new(identifier: impl Into<TextField>, secret: impl Into<TextField>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            secret: Some(secret.into()),
        }
    }
}

impl From<Map<String, Value>> for LoginRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            identifier: take_field(&mut body, &["identifier", "email", "id"]),
            secret: take_field(&mut body, &["secret", "password"]),
        }
    }
}

/// Refresh request. `refresh_token` is accepted for `refreshToken`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(from = "Map<String, Value>", rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(required, custom(function = "not_blank"))]
    #[schema(value_type = Option<String>)]
    pub refresh_token: Option<TextField>,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: impl Into<TextField>) -> Self {
        Self {
            refresh_token: Some(refresh_token.into()),
        }
    }
}

impl From<Map<String, Value>> for RefreshTokenRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            refresh_token: take_field(&mut body, &["refreshToken", "refresh_token"]),
        }
    }
}

/// Public attributes of the authenticated identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IdentityInfo {
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub refresh_token: String,
    pub identity: IdentityInfo,
    /// Configured access token lifetime, e.g. `5m`.
    #[schema(example = "5m")]
    pub expires_in: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshData {
    pub access_token: String,
    #[schema(example = "5m")]
    pub expires_in: String,
}

/// Claims decoded from a verified access token.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VerifiedClaims {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for VerifiedClaims {
    fn from(claims: Claims) -> Self {
        Self {
            identifier: claims.sub,
            name: claims.name,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyData {
    pub claims: VerifiedClaims,
    pub kind: TokenKind,
    #[schema(example = "5m")]
    pub expires_in: String,
}
