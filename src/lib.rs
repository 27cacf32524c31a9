//! # authmock
//!
//! A mock credential service built with Rust and Axum. It authenticates one
//! configured identity and issues signed, time-limited bearer tokens.
//!
//! ## Overview
//!
//! - **Login**: exchange an identifier and secret for an access/refresh token pair
//! - **Refresh**: exchange a refresh token for a new access token
//! - **Verify**: check a bearer access token and return its claims
//!
//! Access tokens are short-lived (default 5 minutes). Refresh tokens last
//! longer (default 1 day) and are only accepted by the refresh operation.
//! Every token records its kind in a `type` claim so that one kind can never
//! stand in for the other.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── authmock-core/    # Error taxonomy and response envelopes
//! ├── authmock-config/  # Environment-driven configuration
//! └── authmock-auth/    # Claims, token codec and identity provider
//! src/
//! ├── middleware/       # Bearer token extractor
//! ├── modules/
//! │   ├── auth/         # login, refresh, verify
//! │   └── status/       # index, health probes, 404 fallback
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing subscriber and request logging
//! ├── metrics.rs        # Prometheus recorder and counters
//! ├── router.rs         # Route table and layers
//! └── state.rs          # Shared application state
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=change-me
//! JWT_ACCESS_EXPIRY=5m
//! JWT_REFRESH_EXPIRY=1d
//! AUTH_IDENTIFIER=test
//! AUTH_SECRET=test
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod extract;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use authmock_auth;
pub use authmock_config;
pub use authmock_core;
