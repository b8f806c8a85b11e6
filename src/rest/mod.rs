//! Scryfall REST API client.
//!
//! [`ScryfallClient`] owns the transport: URL resolution, headers, rate
//! limiting and response decoding. Endpoint accessors live in [`public`]
//! (cards, sets, symbology, catalogs, rulings, bulk data) and [`private`]
//! (account and OAuth).
//!
//! Endpoints without a dedicated accessor can be reached through the
//! generic primitives:
//!
//! ```rust,no_run
//! use scryfall_api_client::rest::ScryfallClient;
//! use scryfall_api_client::rest::public::Card;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScryfallClient::new()?;
//!
//!     let mut page = client.list_page::<Vec<Card>>("cards/search?q=t%3Agoblin").await?;
//!     loop {
//!         for card in &page.data {
//!             println!("{}", card.name);
//!         }
//!         let Some(next) = page.next_page() else { break };
//!         page = client.list_page(next).await?;
//!     }
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod list;
pub mod private;
pub mod public;

pub use client::{ScryfallClient, ScryfallClientBuilder};
pub use list::List;
