//! Authentication module for the Scryfall API.
//!
//! Scryfall authenticates with a single bearer token, which is either an
//! application client secret or an OAuth grant secret. This module provides
//! the [`Credentials`] variant that carries one of them with secure secret storage.

mod credentials;

pub use credentials::Credentials;
