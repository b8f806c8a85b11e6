//! Client-side rate limiting for the Scryfall API.
//!
//! Scryfall asks clients to keep to roughly 10 requests per second and
//! answers bursts beyond that with HTTP 429. Every [`ScryfallClient`] owns a
//! [`RateLimiter`] and takes one admission from it before each request.
//!
//! ## Example
//!
//! ```rust
//! use std::num::NonZeroU32;
//! use scryfall_api_client::rate_limit::RateLimiter;
//! use scryfall_api_client::rest::ScryfallClient;
//!
//! // Slow the client down to 2 requests per second
//! let limiter = RateLimiter::per_second(NonZeroU32::new(2).unwrap());
//! let client = ScryfallClient::builder()
//!     .rate_limiter(Some(limiter))
//!     .build()
//!     .unwrap();
//!
//! // Or disable client-side rate limiting entirely
//! let unthrottled = ScryfallClient::builder().rate_limiter(None).build().unwrap();
//! ```
//!
//! [`ScryfallClient`]: crate::rest::ScryfallClient

mod limiter;

pub use limiter::RateLimiter;

/// Default number of admissions per second.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;
