//! # Authmock Core
//!
//! Foundational types shared by every authmock crate:
//!
//! - [`errors`]: the flat authentication error taxonomy and its HTTP rendering
//! - [`response`]: the `{ success, message, data }` envelope used by every
//!   successful response
//!
//! # Example
//!
//! ```ignore
//! use authmock_core::{ApiResponse, AuthError};
//!
//! fn check(token: Option<&str>) -> Result<ApiResponse<()>, AuthError> {
//!     token.ok_or(AuthError::MissingToken)?;
//!     Ok(ApiResponse::new("Token is valid.", ()))
//! }
//! ```

pub mod errors;
pub mod response;

pub use errors::{AuthError, ErrorBody, set_expose_internal_errors};
pub use response::ApiResponse;
