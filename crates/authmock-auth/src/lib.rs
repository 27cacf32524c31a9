//! # Authmock Auth
//!
//! Credential lifecycle primitives for the authmock service.
//!
//! - [`claims`]: the signed payload shared by access and refresh credentials
//! - [`jwt`]: [`TokenCodec`], which issues and parses credentials
//! - [`identity`]: identity lookup behind the [`IdentityProvider`] trait
//!
//! # Token Kinds
//!
//! - **Access** ([`TokenKind::Access`]): short-lived, carries identifier and
//!   display name, accepted by verification
//! - **Refresh** ([`TokenKind::Refresh`]): long-lived, carries the identifier,
//!   accepted only when exchanging for a new access credential
//!
//! # Example
//!
//! ```ignore
//! use authmock_auth::{TokenCodec, TokenKind, StaticIdentityProvider, IdentityProvider};
//! use authmock_config::{IdentityConfig, JwtConfig};
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let provider = StaticIdentityProvider::from(&IdentityConfig::from_env());
//!
//! let identity = provider.find_by_identifier("test").unwrap();
//! let now = chrono::Utc::now();
//! let access = codec.issue(TokenKind::Access, identity.access_subject(), now)?;
//! let claims = codec.parse(&access.token, TokenKind::Access, now)?;
//! ```

pub mod claims;
pub mod identity;
pub mod jwt;

pub use claims::{Claims, Subject, TokenKind};
pub use identity::{Identity, IdentityProvider, StaticIdentityProvider};
pub use jwt::{Credential, TokenCodec, TokenError};
