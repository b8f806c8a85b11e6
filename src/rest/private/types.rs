//! Types for account and OAuth endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;
use crate::types::serde_helpers::{empty_string_as_none, secret_string};

/// The level of access an OAuth grant has to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthScope {
    /// Inspect account data; no method that changes data is allowed.
    Read,
    /// Full access to the account.
    ReadWrite,
    /// Access to public account information, revoked immediately afterwards.
    Ephemeral,
}

impl std::fmt::Display for OAuthScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OAuthScope::Read => "read",
            OAuthScope::ReadWrite => "read_write",
            OAuthScope::Ephemeral => "ephemeral",
        };
        write!(f, "{}", s)
    }
}

/// A Scryfall account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    /// Twitter handle; `None` when the account has not linked one.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub twitter: Option<String>,
    #[serde(default)]
    pub full_featured: bool,
    #[serde(default)]
    pub verified: bool,
}

/// A Scryfall API application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub homepage_uri: String,
    #[serde(default)]
    pub contact_uri: String,
    #[serde(default)]
    pub contact_email: String,
}

/// An OAuth grant connecting an application to an account.
///
/// Store both `grant_id` and `grant_secret`: the secret authenticates future
/// requests on behalf of the account.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthGrant {
    pub grant_id: String,
    pub created_at: Timestamp,
    pub scope: OAuthScope,
    /// Bearer secret for requests made on behalf of the account.
    #[serde(deserialize_with = "secret_string::deserialize")]
    pub grant_secret: SecretString,
    #[serde(default)]
    pub revoked: bool,
    pub account: Account,
}

/// Confirmation of a revoked grant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthRevokeResponse {
    pub grant_id: String,
    pub created_at: Timestamp,
    pub revoked: bool,
}

/// Body of an OAuth code exchange.
#[derive(Debug, Serialize)]
pub(crate) struct OAuthConvertRequest<'a> {
    pub code: &'a str,
}

/// Body of requests that act on an existing grant.
#[derive(Debug, Serialize)]
pub(crate) struct OAuthGrantRequest<'a> {
    pub grant_id: &'a str,
}
