//! # Authmock Config
//!
//! Configuration types for the authmock service, each loaded once from
//! environment variables at startup and passed by reference afterwards:
//!
//! - [`jwt`]: signing secret and token lifetimes
//! - [`identity`]: the fixed identity the service authenticates against
//! - [`server`]: listen address and deployment environment
//! - [`cors`]: CORS allowed origins
//! - [`observability`]: tracing export, metrics and log file settings
//! - [`duration`]: parsing and formatting of `5m` / `1d` style lifetimes
//!
//! # Example
//!
//! ```ignore
//! use authmock_config::{JwtConfig, IdentityConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let identity_config = IdentityConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod duration;
pub mod identity;
pub mod jwt;
pub mod observability;
pub mod server;

pub use cors::CorsConfig;
pub use duration::{DurationParseError, format_duration, parse_duration};
pub use identity::IdentityConfig;
pub use jwt::JwtConfig;
pub use observability::ObservabilityConfig;
pub use server::{Environment, ServerConfig};
