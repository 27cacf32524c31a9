use std::env;

/// The single identity the service authenticates against.
#[derive(Clone)]
pub struct IdentityConfig {
    pub identifier: String,
    pub secret: String,
    pub display_name: String,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            identifier: env::var("AUTH_IDENTIFIER").unwrap_or(default.identifier),
            secret: env::var("AUTH_SECRET").unwrap_or(default.secret),
            display_name: env::var("AUTH_DISPLAY_NAME").unwrap_or(default.display_name),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            identifier: "test".to_string(),
            secret: "test".to_string(),
            display_name: "Test User".to_string(),
        }
    }
}

// Keep the secret out of logs and panics.
impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}
