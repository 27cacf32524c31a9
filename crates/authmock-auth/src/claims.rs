//! Claim structures embedded in every credential.
//!
//! Both credential kinds share one [`Claims`] shape. The kind marker travels
//! inside the signed payload (as `type`), so a single verification routine
//! serves both kinds and callers must state which kind they expect.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distinguishes short-lived access credentials from long-lived refresh
/// credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity attributes embedded at issuance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub identifier: String,
    pub name: Option<String>,
}

impl Subject {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Signed claims payload.
///
/// - `sub`: identifier of the authenticated identity
/// - `name`: display name (access credentials only)
/// - `type`: [`TokenKind`]
/// - `iat` / `exp`: unix timestamps in seconds, `exp > iat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn subject(&self) -> Subject {
        Subject {
            identifier: self.sub.clone(),
            name: self.name.clone(),
        }
    }

    /// Whether the credential is expired at `now` (unix seconds). The expiry
    /// instant itself already counts as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
