//! The Scryfall list envelope.

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::null_as_default;

/// A requested sequence of other objects (cards, sets, rulings, ...).
///
/// Lists may be paginated and may carry warnings about the request that
/// produced them. `T` is usually a `Vec` of the item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// The requested objects, in a specific order.
    pub data: T,
    /// True if there is a page beyond this one.
    #[serde(default)]
    pub has_more: bool,
    /// Full API URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total number of cards across all pages, only present on card lists.
    #[serde(default)]
    pub total_cards: Option<u64>,
    /// Human-readable, non-fatal issues the API found with the request.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub warnings: Vec<String>,
}

impl<T> List<T> {
    /// Discard the envelope and keep the items.
    pub fn into_data(self) -> T {
        self.data
    }

    /// The next page URL, if the list is paginated and not exhausted.
    pub fn next_page(&self) -> Option<&str> {
        if self.has_more {
            self.next_page.as_deref()
        } else {
            None
        }
    }
}
