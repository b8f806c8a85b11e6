//! Credential management for Scryfall API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ScryfallError;

/// Environment variable read by [`Credentials::from_env`] for the application secret.
pub const CLIENT_SECRET_VAR: &str = "SCRYFALL_CLIENT_SECRET";
/// Environment variable read by [`Credentials::from_env`] for the grant secret.
pub const GRANT_SECRET_VAR: &str = "SCRYFALL_GRANT_SECRET";

/// The credential a client authenticates with.
///
/// Scryfall accepts exactly one bearer token per request, so the two secret
/// kinds are mutually exclusive.
#[derive(Clone, Default)]
pub enum Credentials {
    /// Anonymous access.
    #[default]
    None,
    /// Perform requests as the application that owns this client secret.
    Application(SecretString),
    /// Perform requests with the rights of the account behind this OAuth grant.
    AccountGrant(SecretString),
}

impl Credentials {
    /// Credentials for an application client secret.
    pub fn application(client_secret: impl Into<String>) -> Self {
        Self::Application(SecretString::from(client_secret.into()))
    }

    /// Credentials for an OAuth grant secret.
    pub fn account_grant(grant_secret: impl Into<String>) -> Self {
        Self::AccountGrant(SecretString::from(grant_secret.into()))
    }

    /// Build credentials from an optional client secret and grant secret.
    ///
    /// Empty secrets count as unset. Fails with [`ScryfallError::MultipleSecrets`]
    /// if both are set.
    pub fn from_secrets(
        client_secret: Option<SecretString>,
        grant_secret: Option<SecretString>,
    ) -> Result<Self, ScryfallError> {
        let client_secret = client_secret.filter(|s| !s.expose_secret().is_empty());
        let grant_secret = grant_secret.filter(|s| !s.expose_secret().is_empty());

        match (client_secret, grant_secret) {
            (Some(_), Some(_)) => Err(ScryfallError::MultipleSecrets),
            (Some(secret), None) => Ok(Self::Application(secret)),
            (None, Some(secret)) => Ok(Self::AccountGrant(secret)),
            (None, None) => Ok(Self::None),
        }
    }

    /// Read credentials from `SCRYFALL_CLIENT_SECRET` and `SCRYFALL_GRANT_SECRET`.
    ///
    /// Returns [`Credentials::None`] if neither is set.
    pub fn from_env() -> Result<Self, ScryfallError> {
        Self::from_env_vars(CLIENT_SECRET_VAR, GRANT_SECRET_VAR)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(client_var: &str, grant_var: &str) -> Result<Self, ScryfallError> {
        let client_secret = std::env::var(client_var).ok().map(SecretString::from);
        let grant_secret = std::env::var(grant_var).ok().map(SecretString::from);
        Self::from_secrets(client_secret, grant_secret)
    }

    /// Check if no credential is configured.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Get the bearer token for the `Authorization` header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Application(secret) | Self::AccountGrant(secret) => Some(secret.expose_secret()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Application(_) => f.debug_tuple("Application").field(&"[REDACTED]").finish(),
            Self::AccountGrant(_) => f.debug_tuple("AccountGrant").field(&"[REDACTED]").finish(),
        }
    }
}
