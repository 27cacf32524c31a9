use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use authmock_auth::TokenKind;

use crate::modules::auth::model::VerifiedClaims;

pub const SERVER_NAME: &str = "authmock";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceIndex {
    pub message: String,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthData {
    #[schema(example = "OK")]
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthProbeData {
    pub claims: VerifiedClaims,
    pub kind: TokenKind,
}

pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        method: "POST",
        path: "/api/auth/login",
        description: "Authenticate and receive an access/refresh token pair",
    },
    EndpointInfo {
        method: "POST",
        path: "/api/auth/refresh",
        description: "Exchange a refresh token for a new access token",
    },
    EndpointInfo {
        method: "GET",
        path: "/api/auth/verify",
        description: "Verify a bearer access token",
    },
    EndpointInfo {
        method: "GET",
        path: "/api/test",
        description: "Health probe",
    },
    EndpointInfo {
        method: "GET",
        path: "/api/test/auth",
        description: "Health probe requiring an access token",
    },
];
