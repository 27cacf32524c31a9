use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use authmock_auth::TokenKind;
use authmock_core::ErrorBody;

use crate::modules::auth::model::{
    IdentityInfo, LoginData, LoginRequest, RefreshData, RefreshTokenRequest, VerifiedClaims,
    VerifyData,
};
use crate::modules::status::model::{AuthProbeData, EndpointInfo, HealthData, ServiceIndex};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::verify,
        crate::modules::status::controller::index,
        crate::modules::status::controller::health,
        crate::modules::status::controller::auth_probe,
    ),
    components(
        schemas(
            LoginRequest,
            RefreshTokenRequest,
            IdentityInfo,
            LoginData,
            RefreshData,
            VerifiedClaims,
            VerifyData,
            TokenKind,
            ErrorBody,
            EndpointInfo,
            ServiceIndex,
            HealthData,
            AuthProbeData,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, refresh and token verification"),
        (name = "Status", description = "Service index and health probes")
    ),
    info(
        title = "authmock API",
        version = "0.1.0",
        description = "Mock credential service issuing short-lived access tokens and longer-lived refresh tokens for a single configured identity.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/auth/refresh",
            "/api/auth/verify",
            "/",
            "/api/test",
            "/api/test/auth",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
