use std::env;

use crate::duration::parse_duration;

pub const DEFAULT_SECRET: &str = "authmock-development-secret-change-me";
pub const DEFAULT_ACCESS_EXPIRY: i64 = 5 * 60; // 5 minutes
pub const DEFAULT_REFRESH_EXPIRY: i64 = 24 * 60 * 60; // 1 day

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEFAULT_SECRET.to_string()
            });

        Self {
            secret,
            access_token_expiry: expiry_from_env("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY),
            refresh_token_expiry: expiry_from_env("JWT_REFRESH_EXPIRY", DEFAULT_REFRESH_EXPIRY),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_token_expiry: DEFAULT_ACCESS_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_EXPIRY,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

fn expiry_from_env(key: &str, default: i64) -> i64 {
    match env::var(key) {
        Ok(raw) => parse_duration(&raw).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, default, "Ignoring invalid token lifetime");
            default
        }),
        Err(_) => default,
    }
}
