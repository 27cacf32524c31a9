//! Identity lookup.
//!
//! The service authenticates against identities obtained through an
//! [`IdentityProvider`]. The shipped provider holds exactly one identity from
//! configuration; a store-backed provider can replace it without touching
//! the authentication flow.

use subtle::ConstantTimeEq;

use authmock_config::IdentityConfig;

use crate::claims::Subject;

#[derive(Clone)]
pub struct Identity {
    pub identifier: String,
    pub display_name: String,
    secret: String,
}

impl Identity {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            secret: secret.into(),
        }
    }

    /// Constant-time comparison of `candidate` against the stored secret.
    pub fn verify_secret(&self, candidate: &str) -> bool {
        self.secret.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// Subject carried by access credentials: identifier and display name.
    pub fn access_subject(&self) -> Subject {
        Subject::new(&self.identifier).with_name(&self.display_name)
    }

    /// Subject carried by refresh credentials: identifier only.
    pub fn refresh_subject(&self) -> Subject {
        Subject::new(&self.identifier)
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

pub trait IdentityProvider: Send + Sync {
    fn find_by_identifier(&self, identifier: &str) -> Option<Identity>;
}

/// Serves the one identity defined at process start.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    identity: Identity,
}

impl StaticIdentityProvider {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl From<&IdentityConfig> for StaticIdentityProvider {
    fn from(config: &IdentityConfig) -> Self {
        Self::new(Identity::new(
            &config.identifier,
            &config.secret,
            &config.display_name,
        ))
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn find_by_identifier(&self, identifier: &str) -> Option<Identity> {
        (self.identity.identifier == identifier).then(|| self.identity.clone())
    }
}
