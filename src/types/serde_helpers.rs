//! Custom serde helpers for Scryfall's serialization quirks.
//!
//! Scryfall omits most optional fields, but some arrays come back as an explicit
//! `null` and some strings come back empty. These modules provide reusable serde helpers.

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the type's default value.
///
/// Combine with `#[serde(default)]` to also cover missing fields.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use scryfall_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize, Debug)]
/// struct List {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     warnings: Vec<String>,
/// }
///
/// let list: List = serde_json::from_str(r#"{"warnings":null}"#).unwrap();
/// assert!(list.warnings.is_empty());
///
/// let list: List = serde_json::from_str(r#"{}"#).unwrap();
/// assert!(list.warnings.is_empty());
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize a value, mapping `null` to `T::default()`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Deserialize<'de> + Default,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use scryfall_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Account {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     twitter: Option<String>,
/// }
///
/// let account: Account = serde_json::from_str(r#"{"twitter":""}"#).unwrap();
/// assert!(account.twitter.is_none());
///
/// let account: Account = serde_json::from_str(r#"{"twitter":"scryfall"}"#).unwrap();
/// assert_eq!(account.twitter.unwrap(), "scryfall");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Deserialize a string straight into a [`secrecy::SecretString`].
pub mod secret_string {
    use super::*;
    use secrecy::SecretString;

    /// Deserialize a secret string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretString::from)
    }
}

/// `skip_serializing_if` predicate for flags that are only sent when set.
pub fn is_false(value: &bool) -> bool {
    !*value
}
