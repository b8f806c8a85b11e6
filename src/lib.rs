//! # Scryfall Client
//!
//! An async Rust client library for the [Scryfall](https://scryfall.com/docs/api) REST API.
//!
//! ## Features
//!
//! - Cards, sets, symbology, catalogs, rulings and bulk data endpoints
//! - OAuth account and grant management
//! - Built-in client-side rate limiting (10 requests per second by default)
//! - Strong typing for all request/response types
//! - Scryfall date and timestamp conventions handled by [`types::Date`] and [`types::Timestamp`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scryfall_api_client::rest::ScryfallClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScryfallClient::new()?;
//!     let card = client.get_card_by_name("Lightning Bolt", true, &Default::default()).await?;
//!     println!("{} ({})", card.name, card.set_name);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, ScryfallError};
pub use rest::{List, ScryfallClient};
pub use types::{Color, Date, Timestamp};

/// Result type alias using ScryfallError
pub type Result<T> = std::result::Result<T, ScryfallError>;
