//! Account and OAuth endpoints (authentication required).
//!
//! Account endpoints need a grant secret; OAuth grant management needs the
//! application's client secret.

mod types;

pub use types::*;

use crate::error::ScryfallError;
use crate::rest::ScryfallClient;
use crate::rest::endpoints::private;

impl ScryfallClient {
    /// Get the account behind the configured grant secret.
    ///
    /// Requires a grant with [`OAuthScope::Read`] or higher.
    pub async fn get_account(&self) -> Result<Account, ScryfallError> {
        self.get(private::ACCOUNT).await
    }

    /// Get the application behind the configured client secret.
    pub async fn get_application(&self) -> Result<Application, ScryfallError> {
        self.get(private::APPLICATION).await
    }

    /// Exchange a one-time OAuth code for a full grant.
    ///
    /// Codes expire after 5 minutes and can only be used once.
    /// Requires application authentication.
    pub async fn oauth_convert(&self, code: &str) -> Result<OAuthGrant, ScryfallError> {
        self.post(private::OAUTH_CONVERT, Some(&OAuthConvertRequest { code }))
            .await
    }

    /// Downgrade a grant from [`OAuthScope::ReadWrite`] to [`OAuthScope::Read`].
    ///
    /// A grant that is already read-only is returned unchanged. Downgrades are
    /// permanent. Requires application authentication.
    pub async fn oauth_downgrade(&self, grant_id: &str) -> Result<OAuthGrant, ScryfallError> {
        self.post(private::OAUTH_DOWNGRADE, Some(&OAuthGrantRequest { grant_id }))
            .await
    }

    /// Revoke a grant. Its ID and secret stop working immediately.
    ///
    /// Requires application authentication.
    pub async fn oauth_revoke(&self, grant_id: &str) -> Result<OAuthRevokeResponse, ScryfallError> {
        self.post(private::OAUTH_REVOKE, Some(&OAuthGrantRequest { grant_id }))
            .await
    }
}
