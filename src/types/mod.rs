//! Common types used across the Scryfall client library.

pub mod common;
pub mod datetime;
pub mod serde_helpers;

pub use common::*;
pub use datetime::{Date, Timestamp};
