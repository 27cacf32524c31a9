use std::sync::Arc;

use authmock_auth::{IdentityProvider, StaticIdentityProvider, TokenCodec};
use authmock_config::{CorsConfig, IdentityConfig, JwtConfig};

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub codec: TokenCodec,
    pub identities: Arc<dyn IdentityProvider>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        jwt_config: &JwtConfig,
        identities: Arc<dyn IdentityProvider>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            codec: TokenCodec::new(jwt_config),
            identities,
            cors_config,
        }
    }
}

pub fn init_app_state(jwt_config: &JwtConfig) -> AppState {
    let identities = StaticIdentityProvider::from(&IdentityConfig::from_env());

    AppState::new(
        jwt_config,
        Arc::new(identities),
        CorsConfig::from_env(),
    )
}
