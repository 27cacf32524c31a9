//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: `Authorization` header access and the [`auth::AuthUser`]
//!   extractor, which admits only valid access tokens
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn whoami(AuthUser(claims): AuthUser) -> String {
//!     claims.sub
//! }
//! ```

pub mod auth;
